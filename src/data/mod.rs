pub mod measurement;
pub mod readout;
pub mod ruler;
