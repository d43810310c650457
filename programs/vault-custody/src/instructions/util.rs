use anchor_lang::prelude::*;
use solana_program::ed25519_program;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};

use super::constant::*;
use super::errors::VaultError;

// Ed25519 program instruction layout: count header, then one
// 14-byte offsets entry per signature, then the payloads.
const ED25519_HEADER_LEN: usize = 2;
const ED25519_OFFSETS_LEN: usize = 14;
const PUBKEY_LEN: usize = 32;
const SIGNATURE_LEN: usize = 64;

/// An instruction index of u16::MAX means "this instruction".
const SELF_INSTRUCTION: u16 = u16::MAX;

/// Confirm that an ed25519-program instruction earlier in this transaction
/// verified `expected_message` under `expected_signer`. The runtime has
/// already rejected the transaction if the signature bytes themselves were
/// invalid, so a present-and-matching record proves authorization.
pub fn verify_signed_approval(
    instructions_sysvar: &AccountInfo,
    expected_signer: &Pubkey,
    expected_message: &[u8],
) -> Result<()> {
    let current_index = load_current_index_checked(instructions_sysvar)? as usize;

    for index in 0..current_index {
        let record = load_instruction_at_checked(index, instructions_sysvar)?;
        if record.program_id != ed25519_program::ID {
            continue;
        }
        require!(
            record.data.len() >= ED25519_HEADER_LEN,
            VaultError::SignatureVerificationFailed
        );
        if record_matches(&record.data, expected_signer, expected_message) {
            return Ok(());
        }
    }

    err!(VaultError::InvalidSignature)
}

/// Bit-for-bit match of a raw ed25519-program instruction against the
/// expected signer and message. Exactly one signature per record, and all
/// payloads must live inside the record itself; anything else is a
/// mismatch, never an approximation.
pub fn record_matches(data: &[u8], expected_signer: &Pubkey, expected_message: &[u8]) -> bool {
    if data.len() < ED25519_HEADER_LEN + ED25519_OFFSETS_LEN {
        return false;
    }
    if data[0] != 1 {
        return false;
    }

    let u16_at = |offset: usize| u16::from_le_bytes([data[offset], data[offset + 1]]);
    let signature_offset = u16_at(2) as usize;
    let signature_instruction_index = u16_at(4);
    let public_key_offset = u16_at(6) as usize;
    let public_key_instruction_index = u16_at(8);
    let message_data_offset = u16_at(10) as usize;
    let message_data_size = u16_at(12) as usize;
    let message_instruction_index = u16_at(14);

    if signature_instruction_index != SELF_INSTRUCTION
        || public_key_instruction_index != SELF_INSTRUCTION
        || message_instruction_index != SELF_INSTRUCTION
    {
        return false;
    }

    let Some(public_key) = data.get(public_key_offset..public_key_offset + PUBKEY_LEN) else {
        return false;
    };
    let Some(message) = data.get(message_data_offset..message_data_offset + message_data_size)
    else {
        return false;
    };
    if data
        .get(signature_offset..signature_offset + SIGNATURE_LEN)
        .is_none()
    {
        return false;
    }

    public_key == expected_signer.as_ref() && message == expected_message
}

/// Gate for configuration changes; only the recorded program authority
/// may pass.
pub fn check_config_authority(stored_authority: &Pubkey, caller: &Pubkey) -> Result<()> {
    require!(stored_authority == caller, VaultError::Unauthorized);
    Ok(())
}

pub fn check_external_token_id(external_token_id: &str) -> Result<()> {
    require!(
        !external_token_id.is_empty()
            && external_token_id.len() <= MAX_EXTERNAL_TOKEN_ID_LEN,
        VaultError::InvalidExternalTokenId
    );
    Ok(())
}

pub fn check_vault_name(name: &str) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, VaultError::InvalidName);
    Ok(())
}

pub fn check_base_uri(base_uri: &str) -> Result<()> {
    require!(
        base_uri.len() <= MAX_BASE_URI_LEN,
        VaultError::InvalidBaseUri
    );
    Ok(())
}

/// An approval is valid only near its issuance time: stale approvals are
/// rejected after APPROVAL_WINDOW_SECS, future-dated ones beyond a small
/// drift allowance are rejected outright.
pub fn check_approval_freshness(now: i64, issued_at: i64) -> Result<()> {
    require!(
        issued_at <= now.saturating_add(CLOCK_DRIFT_SECS),
        VaultError::ApprovalExpired
    );
    require!(
        now.saturating_sub(issued_at) <= APPROVAL_WINDOW_SECS,
        VaultError::ApprovalExpired
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mirrors the layout produced by Ed25519Program.createInstructionWithPublicKey.
    fn ed25519_record(signer: &Pubkey, message: &[u8]) -> Vec<u8> {
        let public_key_offset = ED25519_HEADER_LEN + ED25519_OFFSETS_LEN;
        let signature_offset = public_key_offset + PUBKEY_LEN;
        let message_data_offset = signature_offset + SIGNATURE_LEN;

        let mut data = vec![1u8, 0u8];
        data.extend_from_slice(&(signature_offset as u16).to_le_bytes());
        data.extend_from_slice(&SELF_INSTRUCTION.to_le_bytes());
        data.extend_from_slice(&(public_key_offset as u16).to_le_bytes());
        data.extend_from_slice(&SELF_INSTRUCTION.to_le_bytes());
        data.extend_from_slice(&(message_data_offset as u16).to_le_bytes());
        data.extend_from_slice(&(message.len() as u16).to_le_bytes());
        data.extend_from_slice(&SELF_INSTRUCTION.to_le_bytes());
        data.extend_from_slice(signer.as_ref());
        data.extend_from_slice(&[7u8; SIGNATURE_LEN]);
        data.extend_from_slice(message);
        data
    }

    #[test]
    fn matching_record_is_accepted() {
        let signer = Pubkey::new_unique();
        let message = b"mint:vault:1000000000:1700000000:EXT_1:0";
        let data = ed25519_record(&signer, message);

        assert!(record_matches(&data, &signer, message));
    }

    #[test]
    fn single_byte_message_tamper_is_rejected() {
        let signer = Pubkey::new_unique();
        let message = b"mint:vault:1000000000:1700000000:EXT_1:0".to_vec();
        let data = ed25519_record(&signer, &message);

        let mut tampered = message.clone();
        *tampered.last_mut().unwrap() = b'1';
        assert!(!record_matches(&data, &signer, &tampered));
    }

    #[test]
    fn wrong_signer_is_rejected() {
        let signer = Pubkey::new_unique();
        let message = b"claim:vault:5:99:EXT_1";
        let data = ed25519_record(&signer, message);

        assert!(!record_matches(&data, &Pubkey::new_unique(), message));
    }

    #[test]
    fn cross_instruction_payloads_are_rejected() {
        let signer = Pubkey::new_unique();
        let message = b"mint:vault:1:2:EXT_1:0";
        let mut data = ed25519_record(&signer, message);
        // Point the message at another instruction in the transaction.
        data[14] = 0;
        data[15] = 0;

        assert!(!record_matches(&data, &signer, message));
    }

    #[test]
    fn truncated_record_is_rejected() {
        let signer = Pubkey::new_unique();
        let message = b"mint:vault:1:2:EXT_1:0";
        let mut data = ed25519_record(&signer, message);
        data.truncate(data.len() - 4);

        assert!(!record_matches(&data, &signer, message));
    }

    #[test]
    fn multi_signature_record_is_rejected() {
        let signer = Pubkey::new_unique();
        let message = b"mint:vault:1:2:EXT_1:0";
        let mut data = ed25519_record(&signer, message);
        data[0] = 2;

        assert!(!record_matches(&data, &signer, message));
    }

    #[test]
    fn config_authority_gate() {
        let authority = Pubkey::new_unique();
        assert!(check_config_authority(&authority, &authority).is_ok());

        let err = check_config_authority(&authority, &Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, VaultError::Unauthorized.into());
    }

    #[test]
    fn string_bounds_are_enforced() {
        assert!(check_external_token_id("EXT_1").is_ok());
        assert_eq!(
            check_external_token_id("").unwrap_err(),
            VaultError::InvalidExternalTokenId.into()
        );
        assert_eq!(
            check_external_token_id(&"x".repeat(MAX_EXTERNAL_TOKEN_ID_LEN + 1)).unwrap_err(),
            VaultError::InvalidExternalTokenId.into()
        );

        assert!(check_vault_name(&"n".repeat(MAX_NAME_LEN)).is_ok());
        assert_eq!(
            check_vault_name(&"n".repeat(MAX_NAME_LEN + 1)).unwrap_err(),
            VaultError::InvalidName.into()
        );

        assert!(check_base_uri(&"u".repeat(MAX_BASE_URI_LEN)).is_ok());
        assert_eq!(
            check_base_uri(&"u".repeat(MAX_BASE_URI_LEN + 1)).unwrap_err(),
            VaultError::InvalidBaseUri.into()
        );
    }

    #[test]
    fn freshness_window_edges() {
        let now = 1_700_000_000;

        assert!(check_approval_freshness(now, now).is_ok());
        assert!(check_approval_freshness(now, now - APPROVAL_WINDOW_SECS).is_ok());
        assert!(check_approval_freshness(now, now + CLOCK_DRIFT_SECS).is_ok());

        let stale = check_approval_freshness(now, now - APPROVAL_WINDOW_SECS - 1);
        assert_eq!(stale.unwrap_err(), VaultError::ApprovalExpired.into());

        let future = check_approval_freshness(now, now + CLOCK_DRIFT_SECS + 1);
        assert_eq!(future.unwrap_err(), VaultError::ApprovalExpired.into());
    }
}
