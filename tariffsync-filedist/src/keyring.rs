//! Public-key import and signed-envelope authentication.

use crate::error::{FiledistError, FiledistResult};
use pgp::types::PublicKeyTrait;
use pgp::{Deserializable, Message, SignedPublicKey};
use std::io::Cursor;
use tracing::debug;

/// The armor type every imported key block must carry.
pub const PUBLIC_KEY_BLOCK: &str = "PGP PUBLIC KEY BLOCK";

/// Opens a signed envelope, yielding the authenticated payload.
///
/// The production implementation is [`PublicKeyring`]; the seam exists so the
/// rest of the pipeline can be driven without real signatures.
pub trait EnvelopeOpener: Send + Sync {
    fn open(&self, armored: &[u8]) -> FiledistResult<Vec<u8>>;
}

/// Reads the type string from the first `-----BEGIN ...-----` line.
pub fn armor_block_type(armored: &str) -> FiledistResult<&str> {
    armored
        .lines()
        .map(str::trim)
        .find_map(|line| {
            line.strip_prefix("-----BEGIN ")
                .and_then(|rest| rest.strip_suffix("-----"))
        })
        .ok_or_else(|| FiledistError::Armor("no armor header line".to_string()))
}

/// The distribution authority's public key.
#[derive(Debug, Clone)]
pub struct PublicKeyring {
    key: SignedPublicKey,
}

impl PublicKeyring {
    /// Imports an ASCII-armored public key block.
    ///
    /// Any block not armored as a public key is rejected before the key
    /// material is even parsed, and the key's self-signatures must verify.
    pub fn from_armored(armored: &str) -> FiledistResult<Self> {
        let block_type = armor_block_type(armored)?;
        if block_type != PUBLIC_KEY_BLOCK {
            return Err(FiledistError::KeyBlockType {
                found: block_type.to_string(),
            });
        }
        let (key, _headers) = SignedPublicKey::from_string(armored)
            .map_err(|e| FiledistError::Keyring(e.to_string()))?;
        key.verify()
            .map_err(|e| FiledistError::Keyring(format!("self-signature check failed: {e}")))?;
        Ok(Self { key })
    }

    /// Key id of the primary key, for logging.
    pub fn key_id(&self) -> String {
        format!("{:?}", self.key.key_id())
    }

    fn verify(&self, message: &Message) -> FiledistResult<()> {
        let mut last_error = match message.verify(&self.key) {
            Ok(()) => return Ok(()),
            Err(e) => e.to_string(),
        };
        for subkey in &self.key.public_subkeys {
            match message.verify(subkey) {
                Ok(()) => return Ok(()),
                Err(e) => last_error = e.to_string(),
            }
        }
        Err(FiledistError::Signature(last_error))
    }
}

impl EnvelopeOpener for PublicKeyring {
    fn open(&self, armored: &[u8]) -> FiledistResult<Vec<u8>> {
        let (message, _headers) = Message::from_armor_single(Cursor::new(armored))
            .map_err(|e| FiledistError::Armor(e.to_string()))?;
        let message = match message {
            Message::Compressed(_) => message
                .decompress()
                .map_err(|e| FiledistError::Armor(e.to_string()))?,
            other => other,
        };
        self.verify(&message)?;
        let content = message
            .get_content()
            .map_err(|e| FiledistError::Signature(e.to_string()))?
            .ok_or_else(|| FiledistError::Signature("message carries no literal data".to_string()))?;
        debug!(bytes = content.len(), "envelope verified");
        Ok(content)
    }
}
