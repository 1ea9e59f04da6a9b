use std::io::Write;

use crate::asm::error::{Error, Result};

// Program ROM size of the target machine
pub const ROM_SIZE: usize = 256;

/// Fill the image out to `capacity` bytes with zeros, `written` bytes are
/// already in `out`. An image that doesn't fit is an error and nothing is
/// written.
pub fn pad_image<W: Write>(out: &mut W, written: usize, capacity: usize) -> Result<()> {
    if written > capacity {
        return Err(Error::ProgramTooLarge { size: written, capacity });
    }
    out.write_all(&vec![0; capacity - written])?;
    Ok(())
}

/// `image` with trailing zero padding cut off.
///
/// Padding and `andi ireg` are both 0x00, so trailing `andi ireg`
/// instructions at the end of a program are cut off too.
pub fn trim_padding(image: &[u8]) -> &[u8] {
    let end = image.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &image[..end]
}
