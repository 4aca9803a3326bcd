// NFT contract: mint to the sender, list owned tokens by struct type

use super::{require_text, ContractError};
use crate::core::ObjectId;
use crate::tx::{CallArg, CallPlan, MoveTarget};

pub const MODULE: &str = "nft";
pub const STRUCT_NAME: &str = "NFT";

pub struct NftCollection {
    package: ObjectId,
}

impl NftCollection {
    pub fn new(package: ObjectId) -> Self {
        Self { package }
    }

    /// Type tag used to filter owned objects, `<package>::nft::NFT`
    pub fn struct_type(&self) -> String {
        format!("{}::{}::{}", self.package, MODULE, STRUCT_NAME)
    }

    /// Mint an NFT owned by the signer
    pub fn mint_to_sender(
        &self,
        name: &str,
        description: &str,
        image_url: &str,
    ) -> Result<CallPlan, ContractError> {
        require_text("name", name)?;
        require_text("description", description)?;
        require_text("image url", image_url)?;

        let arguments = vec![
            CallArg::pure_string(name)?,
            CallArg::pure_string(description)?,
            CallArg::pure_string(image_url)?,
        ];

        let mut plan = CallPlan::new();
        plan.move_call(MoveTarget::new(self.package, MODULE, "mint_to_sender"), arguments)?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decode_string;
    use crate::tx::Command;

    fn collection() -> NftCollection {
        NftCollection::new(
            ObjectId::from_hex("0x430f25df7e6d52c4f68798248ede62adfd16b73bea4496224a666c4be1ee4aa1").unwrap(),
        )
    }

    #[test]
    fn test_struct_type() {
        assert_eq!(
            collection().struct_type(),
            "0x430f25df7e6d52c4f68798248ede62adfd16b73bea4496224a666c4be1ee4aa1::nft::NFT"
        );
    }

    #[test]
    fn test_mint_arguments() {
        let url = format!("https://example.com/{}.png", "a".repeat(150));
        let plan = collection().mint_to_sender("Sui Cat", "A cat ☕", &url).unwrap();

        match &plan.commands()[0] {
            Command::MoveCall { target, arguments } => {
                assert_eq!(target.function, "mint_to_sender");
                assert_eq!(arguments.len(), 3);

                let decoded: Vec<String> = arguments
                    .iter()
                    .map(|arg| match arg {
                        CallArg::Pure(bytes) => decode_string(bytes).unwrap(),
                        other => panic!("expected pure argument, got {:?}", other),
                    })
                    .collect();
                assert_eq!(decoded, vec!["Sui Cat".to_string(), "A cat ☕".to_string(), url.clone()]);

                // URL is longer than 127 bytes: two-byte prefix
                if let CallArg::Pure(bytes) = &arguments[2] {
                    assert_eq!(bytes[0] & 0x80, 0x80);
                    assert_eq!(bytes[1] & 0x80, 0);
                }
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_mint_requires_all_fields() {
        let nft = collection();
        assert!(matches!(
            nft.mint_to_sender("", "desc", "https://x"),
            Err(ContractError::EmptyField("name"))
        ));
        assert!(matches!(
            nft.mint_to_sender("n", " ", "https://x"),
            Err(ContractError::EmptyField("description"))
        ));
        assert!(matches!(
            nft.mint_to_sender("n", "d", "\t"),
            Err(ContractError::EmptyField("image url"))
        ));
    }
}
