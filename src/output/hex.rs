//! Upper-case hex formatting for MAC addresses and raw bytes.

use core::fmt;

/// Hex digit for the low nibble of `nibble`.  Upper bits are ignored.
pub const fn hex_digit(nibble: u8) -> char {
    let n = nibble & 0x0F;
    if n < 10 {
        (b'0' + n) as char
    } else {
        (b'A' + n - 10) as char
    }
}

/// Six-byte IEEE MAC address.
pub type MacAddress = [u8; 6];

/// Write `bytes` as upper-case two-digit octets joined by `separator`.
pub fn write_hex_bytes<W: fmt::Write>(bytes: &[u8], separator: &str, out: &mut W) -> fmt::Result {
    for (i, octet) in bytes.iter().enumerate() {
        if i > 0 {
            out.write_str(separator)?;
        }
        out.write_char(hex_digit(octet >> 4))?;
        out.write_char(hex_digit(*octet))?;
    }
    Ok(())
}

/// Write `mac` as upper-case octets joined by `separator`
/// (e.g. `DE:AD:BE:EF:CA:FE`).
pub fn write_mac_hex<W: fmt::Write>(mac: &MacAddress, separator: &str, out: &mut W) -> fmt::Result {
    write_hex_bytes(mac, separator, out)
}

/// [`write_mac_hex`] into a fresh string.  Separators longer than 4 bytes
/// get truncated output.
pub fn mac_string(mac: &MacAddress, separator: &str) -> heapless::String<32> {
    let mut s = heapless::String::new();
    let _ = write_mac_hex(mac, separator, &mut s);
    s
}
