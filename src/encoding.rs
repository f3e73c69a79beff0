/// Encode raw bytes as lowercase hex, two digits per byte, high nibble first.
/// `[0x00, 0xff, 0x10]` encodes to `"00ff10"`.
pub fn encode_lower_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
