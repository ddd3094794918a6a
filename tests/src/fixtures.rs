//! # Test Fixtures
//!
//! A minimal transfer transaction that carries identifiers the way real
//! transactions do: embedded between other fields, with no outer length.

use qc_18_account_identity::{DecodeError, KeyId, NickId, RegId, UserId};
use shared_crypto::Secp256k1KeyPair;
use shared_types::{
    compact_size_len, varint_len, BlockHeight, Decodable, Encodable, WireReader, WireWriter,
};

/// Transfer between two accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferTx {
    pub version: u8,
    pub valid_height: BlockHeight,
    pub from: UserId,
    pub to: UserId,
    pub amount: u64,
    pub memo: Vec<u8>,
}

impl Encodable for TransferTx {
    fn encoded_size(&self) -> usize {
        1 + varint_len(u64::from(self.valid_height))
            + self.from.encoded_size()
            + self.to.encoded_size()
            + varint_len(self.amount)
            + compact_size_len(self.memo.len() as u64)
            + self.memo.len()
    }

    fn encode_to(&self, writer: &mut WireWriter) {
        writer.write_u8(self.version);
        writer.write_varint(u64::from(self.valid_height));
        self.from.encode_to(writer);
        self.to.encode_to(writer);
        writer.write_varint(self.amount);
        writer.write_compact_size(self.memo.len() as u64);
        writer.write_bytes(&self.memo);
    }
}

impl Decodable for TransferTx {
    type Error = DecodeError;

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self, Self::Error> {
        let version = reader.read_u8()?;
        let valid_height = reader.read_varint_u32()?;
        let from = UserId::decode_from(reader)?;
        let to = UserId::decode_from(reader)?;
        let amount = reader.read_varint()?;
        let memo_len = reader.read_compact_size()? as usize;
        let memo = reader.read_slice(memo_len)?.to_vec();
        Ok(Self {
            version,
            valid_height,
            from,
            to,
            amount,
            memo,
        })
    }
}

/// One identifier of every non-null kind.
pub fn sample_ids() -> Vec<UserId> {
    let key = Secp256k1KeyPair::from_bytes([0x42; 32])
        .map(|pair| pair.public_key())
        .unwrap_or_default();
    vec![
        UserId::from(RegId::new(1_234_567, 89)),
        UserId::from(KeyId::new([0x9D; 20])),
        UserId::from(key),
        UserId::from(NickId::new(0x5A5A_5A5A_5A5A_5A5A)),
    ]
}

/// A transfer from `from` to `to` with a short memo.
pub fn transfer(from: UserId, to: UserId) -> TransferTx {
    TransferTx {
        version: 1,
        valid_height: 2_000,
        from,
        to,
        amount: 50_000,
        memo: b"rent".to_vec(),
    }
}
