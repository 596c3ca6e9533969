/// Smallest byte sequences that carry each supported signature
pub fn jpeg() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00]
}

pub fn png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D',
        b'R',
    ]
}

pub fn gif() -> Vec<u8> {
    b"GIF89a\x01\x00\x01\x00\x00\x00\x00".to_vec()
}

/// JPEG header padded to `len` bytes
pub fn jpeg_of_size(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    data[..3].copy_from_slice(&[0xFF, 0xD8, 0xFF]);
    data
}
