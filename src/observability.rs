use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("geminius.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("geminius.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("geminius.client.request_duration_seconds");

pub(crate) static CHAT_TURNS: Counter = Counter::new("geminius.chat.turns");
pub(crate) static CHAT_TURN_FAILURES: Counter = Counter::new("geminius.chat.turn_failures");
pub(crate) static CHAT_SILENT_TURNS: Counter = Counter::new("geminius.chat.silent_turns");
pub(crate) static CHAT_CREDENTIAL_PROMPTS: Counter =
    Counter::new("geminius.chat.credential_prompts");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&CHAT_TURNS);
    collector.register_counter(&CHAT_TURN_FAILURES);
    collector.register_counter(&CHAT_SILENT_TURNS);
    collector.register_counter(&CHAT_CREDENTIAL_PROMPTS);
}
