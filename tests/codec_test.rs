#[cfg(test)]
mod tests {
    extern crate tinyxpc as txpc;

    use txpc::{ConfigBody, FrameType, Header, HDR_LEN};

    #[test]
    fn header_wire_layout() {
        // size is little-endian, then type, to, from; no padding
        let hdr = Header::new(FrameType::Msg, 0x1234, 7, 9);
        assert_eq!(hdr.encode(), [0x34, 0x12, 6, 7, 9]);
    }

    #[test]
    fn header_roundtrip() {
        let cases = [
            (0u16, FrameType::Reset, 0u8, 0u8),
            (1, FrameType::Config, 0, 0),
            (12, FrameType::Msg, 1, 1),
            (255, FrameType::Xon, 3, 4),
            (256, FrameType::Xoff, 0xff, 0x80),
            (u16::MAX, FrameType::Msg, 0xff, 0xff),
        ];
        for &(size, kind, to, from) in cases.iter() {
            let hdr = Header::new(kind, size, to, from);
            assert_eq!(Header::decode(&hdr.encode()), hdr);
        }
    }

    #[test]
    fn header_decode_is_total() {
        // any 5 bytes decode to something; type validation happens later
        let raw: [u8; HDR_LEN] = [0xff, 0xff, 0xee, 0xdd, 0xcc];
        let hdr = Header::decode(&raw);
        assert_eq!(hdr.size, 0xffff);
        assert_eq!(hdr.kind, 0xee);
        assert_eq!(FrameType::from_u8(hdr.kind), None);
    }

    #[test]
    fn frame_type_mapping() {
        assert_eq!(FrameType::from_u8(1), Some(FrameType::Reset));
        assert_eq!(FrameType::from_u8(2), Some(FrameType::Config));
        assert_eq!(FrameType::from_u8(3), Some(FrameType::Xon));
        assert_eq!(FrameType::from_u8(4), Some(FrameType::Xoff));
        assert_eq!(FrameType::from_u8(5), Some(FrameType::Ack));
        assert_eq!(FrameType::from_u8(6), Some(FrameType::Msg));
        assert_eq!(FrameType::from_u8(0), None);
        assert_eq!(FrameType::from_u8(7), None);
    }

    #[test]
    fn canonical_reset() {
        assert!(Header::reset().is_reset_handshake());
        // any non-zero field disqualifies the frame
        assert!(!Header::new(FrameType::Reset, 1, 0, 0).is_reset_handshake());
        assert!(!Header::new(FrameType::Reset, 0, 1, 0).is_reset_handshake());
        assert!(!Header::new(FrameType::Reset, 0, 0, 1).is_reset_handshake());
        assert!(!Header::new(FrameType::Msg, 0, 0, 0).is_reset_handshake());
    }

    #[test]
    fn config_roundtrip() {
        let polynomials: [&[u8]; 5] = [
            &[],
            &[0x07],
            &[0x05, 0x80],
            &[0x00, 0x08, 0x92, 0xd0],
            &[0x1b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x42],
        ];
        let widths = [0u8, 8, 16, 32, 64];
        for (&bits, &polyn) in widths.iter().zip(polynomials.iter()) {
            let body = ConfigBody::new(txpc::FLAG_REQ_ACK, bits, polyn);
            let raw = body.encode();
            assert_eq!(raw.len(), 2 + polyn.len());
            assert_eq!(ConfigBody::decode(&raw), Some(body));
        }
    }

    #[test]
    fn config_decode_rejects_garbage() {
        // too short for flags + crc_bits
        assert_eq!(ConfigBody::decode(&[0x01]), None);
        // reserved flag bits must be zero
        assert_eq!(ConfigBody::decode(&[0x02, 0]), None);
        // width must be a legal one
        assert_eq!(ConfigBody::decode(&[0x00, 12, 0xaa]), None);
        // polynomial length must match the width
        assert_eq!(ConfigBody::decode(&[0x00, 32, 0xaa, 0xbb]), None);
        assert_eq!(ConfigBody::decode(&[0x00, 0, 0xaa]), None);
    }

    #[test]
    fn crc_widths() {
        assert!(txpc::valid_crc_bits(0));
        assert!(txpc::valid_crc_bits(8));
        assert!(txpc::valid_crc_bits(16));
        assert!(txpc::valid_crc_bits(32));
        assert!(txpc::valid_crc_bits(64));
        assert!(!txpc::valid_crc_bits(1));
        assert!(!txpc::valid_crc_bits(33));
        assert!(!txpc::valid_crc_bits(128));
    }
}
