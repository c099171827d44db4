// LSB steganography codec
// Frames a message as a sentinel-terminated bit stream in RGBA low bits

/// Bit pattern marking the end of an embedded payload.
pub const TERMINATOR: u16 = 0b1111_1111_1111_1110;

/// Width of the terminator pattern in bits.
pub const TERMINATOR_BITS: usize = 16;

const CHANNELS_PER_PIXEL: usize = 4;
const USABLE_CHANNELS: usize = 3;

/// Number of payload bits a buffer can carry: three per pixel, alpha skipped.
pub fn capacity_bits(pixels: &[u8]) -> usize {
    pixels.len() / CHANNELS_PER_PIXEL * USABLE_CHANNELS
}

/// Embed `message` into the low bits of the R, G and B channels of an RGBA
/// buffer, in raster order. Alpha channels are never touched.
///
/// Each character contributes its 8-bit code most-significant-bit first,
/// followed by the fixed terminator pattern. Channels past the end of the
/// stream keep their original values. A stream longer than the buffer's
/// capacity is silently truncated; the overrun is only visible in the log.
pub fn embed_message(pixels: &mut [u8], message: &str) {
    let bits = message_bits(message);

    if bits.len() > capacity_bits(pixels) {
        log::warn!(
            "bit stream of {} bits exceeds capacity of {} bits, truncating",
            bits.len(),
            capacity_bits(pixels)
        );
    }

    let mut stream = bits.iter();
    for pixel in pixels.chunks_mut(CHANNELS_PER_PIXEL) {
        for channel in pixel.iter_mut().take(USABLE_CHANNELS) {
            match stream.next() {
                Some(&bit) => *channel = (*channel & !1) | bit,
                None => return,
            }
        }
    }
}

/// Extract a message framed by the terminator pattern, or `None` when no
/// complete terminator appears in the buffer.
pub fn extract_message(pixels: &[u8]) -> Option<String> {
    let mut bits: Vec<u8> = Vec::with_capacity(capacity_bits(pixels));
    let mut window: u16 = 0;

    for pixel in pixels.chunks(CHANNELS_PER_PIXEL) {
        for channel in pixel.iter().take(USABLE_CHANNELS) {
            let bit = *channel & 1;
            bits.push(bit);
            window = (window << 1) | u16::from(bit);

            // The pattern's top bit guarantees at least 16 bits were read.
            if window == TERMINATOR {
                let payload = &bits[..bits.len() - TERMINATOR_BITS];
                log::debug!("terminator found after {} bits", bits.len());
                return Some(assemble(payload));
            }
        }
    }

    None
}

/// Bit stream for a message: 8 bits per character, then the terminator.
fn message_bits(message: &str) -> Vec<u8> {
    let mut bits = Vec::with_capacity(message.len() * 8 + TERMINATOR_BITS);

    for code in message.chars().map(|c| c as u32) {
        for shift in (0..8).rev() {
            bits.push(((code >> shift) & 1) as u8);
        }
    }
    for shift in (0..TERMINATOR_BITS).rev() {
        bits.push(((usize::from(TERMINATOR) >> shift) & 1) as u8);
    }

    bits
}

/// Regroup payload bits into 8-bit character codes.
fn assemble(bits: &[u8]) -> String {
    bits.chunks(8)
        .map(|group| {
            let code = group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
            char::from(code)
        })
        .collect()
}
