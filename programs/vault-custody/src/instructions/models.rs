use anchor_lang::prelude::*;

/// A signed approval always commits to one canonical byte string. The
/// off-chain signer and this program must build it identically, so the
/// construction lives here and nowhere else.
pub trait Approval {
    fn message(&self, vault: &Pubkey) -> Vec<u8>;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct MintApproval {
    pub price: u64,
    pub timestamp: i64,
    pub external_token_id: String,
    /// Current vault nonce at signing time; replay protection.
    pub nonce: u64,
}

impl Approval for MintApproval {
    fn message(&self, vault: &Pubkey) -> Vec<u8> {
        format!(
            "mint:{}:{}:{}:{}:{}",
            vault, self.price, self.timestamp, self.external_token_id, self.nonce
        )
        .into_bytes()
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct ClaimApproval {
    pub price: u64,
    pub timestamp: i64,
    pub external_token_id: String,
}

impl Approval for ClaimApproval {
    fn message(&self, vault: &Pubkey) -> Vec<u8> {
        format!(
            "claim:{}:{}:{}:{}",
            vault, self.price, self.timestamp, self.external_token_id
        )
        .into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn mint_message_is_canonical() {
        let vault = Pubkey::from_str("DMLBNjTTdxA3Tnbx21ZsQU3hX1VUSW4SENPb3HCZrBCr").unwrap();
        let approval = MintApproval {
            price: 1_000_000_000,
            timestamp: 1_700_000_000,
            external_token_id: "EXT_1".to_string(),
            nonce: 0,
        };

        assert_eq!(
            approval.message(&vault),
            format!("mint:{}:1000000000:1700000000:EXT_1:0", vault).into_bytes()
        );
    }

    #[test]
    fn claim_message_omits_nonce() {
        let vault = Pubkey::new_unique();
        let approval = ClaimApproval {
            price: 5,
            timestamp: 99,
            external_token_id: "EXT_1".to_string(),
        };

        assert_eq!(
            approval.message(&vault),
            format!("claim:{}:5:99:EXT_1", vault).into_bytes()
        );
    }

    #[test]
    fn any_field_change_changes_the_message() {
        let vault = Pubkey::new_unique();
        let base = MintApproval {
            price: 10,
            timestamp: 20,
            external_token_id: "EXT_1".to_string(),
            nonce: 3,
        };

        let variants = [
            MintApproval { price: 11, ..base.clone() },
            MintApproval { timestamp: 21, ..base.clone() },
            MintApproval { external_token_id: "EXT_2".to_string(), ..base.clone() },
            MintApproval { nonce: 4, ..base.clone() },
        ];
        for variant in &variants {
            assert_ne!(variant.message(&vault), base.message(&vault));
        }

        let other_vault = Pubkey::new_unique();
        assert_ne!(base.message(&other_vault), base.message(&vault));
    }

    #[test]
    fn mint_and_claim_messages_never_collide() {
        // Same numeric fields, different action prefix.
        let vault = Pubkey::new_unique();
        let mint = MintApproval {
            price: 10,
            timestamp: 20,
            external_token_id: "EXT_1".to_string(),
            nonce: 0,
        };
        let claim = ClaimApproval {
            price: 10,
            timestamp: 20,
            external_token_id: "EXT_1".to_string(),
        };

        assert_ne!(mint.message(&vault), claim.message(&vault));
    }
}
