//! # Transfer Flow
//!
//! A transfer references its sender and recipient by `UserId`:
//!
//! 1. Parse the operator-entered identifiers
//! 2. Encode the transaction; identifiers are embedded with no outer length
//! 3. Decode on the receiving node; any unreadable identifier rejects the tx
//! 4. Resolve both sides to key hashes and check maturity

#[cfg(test)]
mod tests {
    use crate::fixtures::{sample_ids, transfer, TransferTx};
    use qc_18_account_identity::{
        AccountIdentityApi, AccountIdentityService, DecodeError, IdentityError,
        InMemoryAccountLookup, KeyId, MaturityConfig, NickId, RegId, ResolveError, UserId,
    };
    use shared_types::{CodecError, Decodable, Encodable};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const ALICE_KEY: KeyId = KeyId::new([0xA1; 20]);
    const BOB_KEY: KeyId = KeyId::new([0xB0; 20]);

    fn service() -> AccountIdentityService<InMemoryAccountLookup> {
        let lookup = InMemoryAccountLookup::new();
        lookup.register(RegId::new(1_000, 3), Some(NickId::parse("alice").unwrap()), ALICE_KEY);
        lookup.register(RegId::new(1_500, 0), None, BOB_KEY);
        AccountIdentityService::new(lookup, MaturityConfig::default())
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_transfer_round_trip_for_every_pair() {
        for from in sample_ids() {
            for to in sample_ids() {
                let tx = transfer(from.clone(), to);
                let bytes = tx.encode();
                assert_eq!(bytes.len(), tx.encoded_size());
                assert_eq!(TransferTx::decode(&bytes).unwrap(), tx);
            }
        }
    }

    #[test]
    fn test_parse_encode_decode_resolve() {
        let svc = service();
        let from = svc.parse_user_id("alice").unwrap();
        let to = svc.parse_user_id("1500-0").unwrap();

        let bytes = transfer(from, to).encode();
        let received = TransferTx::decode(&bytes).unwrap();

        assert_eq!(svc.resolve_key_id(&received.from).unwrap(), ALICE_KEY);
        assert_eq!(svc.resolve_key_id(&received.to).unwrap(), BOB_KEY);
    }

    #[test]
    fn test_unknown_recipient_tag_rejects_transaction() {
        let tx = transfer(
            UserId::from(RegId::new(1_000, 3)),
            UserId::from(KeyId::new([0x01; 20])),
        );
        let mut bytes = tx.encode();
        // version, 2-byte height, then from = [0x03, h, h, i].
        let to_offset = 1 + 2 + tx.from.encoded_size();
        assert_eq!(bytes[to_offset], 20);
        bytes[to_offset] = 21;

        assert_eq!(
            TransferTx::decode(&bytes),
            Err(DecodeError::UnknownTag { tag: 21 })
        );
    }

    #[test]
    fn test_reg_id_length_mismatch_rejects_transaction() {
        let tx = transfer(
            UserId::from(RegId::new(100, 5)),
            UserId::from(NickId::new(7)),
        );
        let mut bytes = tx.encode();
        // Sender tag claims three bytes for a two-byte pair.
        let from_offset = 1 + 2;
        assert_eq!(bytes[from_offset], 2);
        bytes[from_offset] = 3;

        assert_eq!(
            TransferTx::decode(&bytes),
            Err(DecodeError::RegIdLengthMismatch {
                declared: 3,
                consumed: 2
            })
        );
    }

    #[test]
    fn test_truncated_transaction_rejected() {
        let ids = sample_ids();
        let bytes = transfer(ids[0].clone(), ids[2].clone()).encode();
        assert!(matches!(
            TransferTx::decode(&bytes[..bytes.len() - 1]),
            Err(DecodeError::Codec(CodecError::UnexpectedEof { .. }))
        ));
    }

    #[test]
    fn test_unregistered_recipient_is_an_error() {
        let svc = service();
        let to = svc.parse_user_id("9-9").unwrap();
        assert!(matches!(
            svc.resolve_key_id(&to),
            Err(IdentityError::Resolve(ResolveError::AccountNotFound { .. }))
        ));
    }

    #[test]
    fn test_immature_sender_detected_after_decode() {
        let svc = service();
        let tx = transfer(UserId::from(RegId::new(1_950, 0)), UserId::from(BOB_KEY));
        let received = TransferTx::decode(&tx.encode()).unwrap();

        assert!(!svc.is_mature(&received.from, received.valid_height));
        assert!(svc.is_mature(&received.from, received.valid_height + 50));
        assert!(svc.is_mature(&received.to, 0));
    }
}
