pub mod worklog;
