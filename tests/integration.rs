#[path = "integration/util.rs"]
mod util;
#[path = "integration/test_connectivity.rs"]
mod test_connectivity;
#[path = "integration/test_listeners.rs"]
mod test_listeners;
#[path = "integration/test_errors.rs"]
mod test_errors;
