mod one_time_passcode;
mod roster_request;
mod team;
mod user;
