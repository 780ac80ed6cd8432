pub mod daily_log;
pub mod emergency;
pub mod locale;
pub mod patient;
pub mod profile;
pub mod risk;
pub mod symptom;
