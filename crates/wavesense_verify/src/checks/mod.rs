//! The built-in behaviour checks, one per claim category.

mod enable_gating;
mod increment;
mod mid_stream_reset;
mod reset_clears;
mod reset_priority;
mod wraparound;

pub use enable_gating::EnableGating;
pub use increment::Increment;
pub use mid_stream_reset::MidStreamReset;
pub use reset_clears::ResetClears;
pub use reset_priority::ResetPriority;
pub use wraparound::Wraparound;

/// All-ones value of a `width`-bit counter. Widths of 64 and above saturate.
pub(crate) fn counter_mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}
