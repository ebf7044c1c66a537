use std::io::{self, Write};

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    queue,
};
use tracing::warn;

/// Keeps key release reporting switched on for as long as it lives.
///
/// The flags are popped on drop, so early returns and panics unwinding out of
/// the game loop leave the terminal the way it was found.
pub struct ReleaseReporting<W: Write> {
    out: W,
}

impl<W: Write> ReleaseReporting<W> {
    pub fn enable(mut out: W) -> io::Result<Self> {
        queue!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
        out.flush()?;
        Ok(Self { out })
    }
}

impl<W: Write> Drop for ReleaseReporting<W> {
    fn drop(&mut self) {
        let popped = queue!(self.out, PopKeyboardEnhancementFlags).and_then(|()| self.out.flush());
        if let Err(err) = popped {
            warn!(%err, "failed to pop keyboard enhancement flags");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUSH: &[u8] = b"\x1b[>2u";
    const POP: &[u8] = b"\x1b[<1u";

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|window| window == needle)
    }

    fn fails_halfway(out: &mut Vec<u8>) -> io::Result<()> {
        let _reporting = ReleaseReporting::enable(out)?;
        Err(io::Error::other("title write failed"))
    }

    #[test]
    fn pushes_then_pops_on_drop() {
        let mut out = Vec::new();
        {
            let _reporting = ReleaseReporting::enable(&mut out).unwrap();
        }
        assert!(out.starts_with(PUSH));
        assert!(out.ends_with(POP));
    }

    #[test]
    fn pops_when_leaving_through_an_error() {
        let mut out = Vec::new();
        assert!(fails_halfway(&mut out).is_err());
        assert!(contains(&out, PUSH));
        assert!(out.ends_with(POP));
    }

    #[test]
    fn pops_when_a_panic_unwinds() {
        let mut out = Vec::new();
        let unwound = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _reporting = ReleaseReporting::enable(&mut out).unwrap();
            panic!("ball.update: ball cannot collide with itself");
        }));
        assert!(unwound.is_err());
        assert!(out.ends_with(POP));
    }
}
