use crate::utils::{DefaultRandom, Environment, InfoLogger};
use std::sync::{Arc, Mutex};

/// Creates an environment with a repeatable random generator and a no-op logger.
pub fn create_test_environment() -> Arc<Environment> {
    Arc::new(Environment::new(Arc::new(DefaultRandom::new_repeatable()), Arc::new(|_| {})))
}

/// Creates a logger which collects all messages for later inspection.
pub fn create_collecting_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let collected = messages.clone();
    let logger: InfoLogger = Arc::new(move |msg: &str| collected.lock().unwrap().push(msg.to_string()));

    (logger, messages)
}
