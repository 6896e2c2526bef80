//! Background jobs run on a cron schedule.

pub mod passcode_sweep;
