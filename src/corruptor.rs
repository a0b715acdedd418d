use rand::Rng;
use tracing::{debug, instrument};

/// Number of zeroed bytes a buffer of `len` bytes needs to be balanced.
pub fn quota(len: usize) -> usize {
    len / 2
}

/// Zeroes random bytes of `buffer` until [`quota`] of them have been zeroed.
///
/// Only bytes that were non-zero count, so drawing an index that is already
/// zero costs an extra draw. The loop body runs at least once for a
/// non-empty buffer. It also stops when no non-zero byte is left, in which
/// case the returned count is below the quota.
///
/// Returns the number of bytes zeroed by this call.
#[instrument(skip(buffer, rng), fields(len = buffer.len()))]
pub fn corrupt<R: Rng + ?Sized>(buffer: &mut [u8], rng: &mut R) -> usize {
    let len = buffer.len();
    if len == 0 {
        return 0;
    }

    let quota = quota(len);
    let mut remaining = buffer.iter().filter(|&&b| b != 0).count();
    let mut zeroed = 0;
    let mut draws: u64 = 0;

    loop {
        let index = rng.gen_range(0..len);
        draws += 1;
        if buffer[index] != 0 {
            buffer[index] = 0;
            zeroed += 1;
            remaining -= 1;
        }
        if zeroed >= quota || remaining == 0 {
            break;
        }
    }

    debug!("Zeroed {} of {} bytes in {} draws", zeroed, len, draws);
    zeroed
}
