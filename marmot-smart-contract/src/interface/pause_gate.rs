use marmot_smart_near::{ErrCode, ErrorConst, Level, LogEvent};

/// Global switch that halts every value moving operation, except emergency withdrawals
pub trait PauseGate {
    fn ops_paused(&self) -> bool;

    /// Flips the pause flag and returns the new value
    ///
    /// ## Panics
    /// if the predecessor account is not the owner account
    fn ops_pause_toggle(&mut self) -> bool;
}

pub const LOG_EVENT_PAUSED: LogEvent = LogEvent(Level::WARN, "PAUSED");

pub const LOG_EVENT_UNPAUSED: LogEvent = LogEvent(Level::INFO, "UNPAUSED");

pub const ERR_PAUSED: ErrorConst = ErrorConst(ErrCode("PAUSED"), "contract is paused");
