use crate::errors::CivicError;
use crate::services::AuthService;
use crate::transport::Transport;
use crate::views::feedback::Feedback;
use crate::views::routes;
use crate::wallet::{ether_to_wei, Address, ContractCall, Wallet, DONATION_CONTRACT_ADDRESS};

use std::sync::Arc;

pub const INVALID_DETAILS: &str = "Please connect your wallet and enter valid donation details.";
pub const DONATION_SUCCEEDED: &str = "Donation successful!";
pub const DONATION_FAILED: &str = "Donation failed. Please try again.";

const DONATE_FUNCTION: &str = "donate";

/// State behind the donation page of one initiative.
pub struct SupportPageController<T: ?Sized, W: ?Sized> {
    transport: Arc<T>,
    wallet: Option<Arc<W>>,
    contract: Address,
    initiative_id: String,
    account: Option<Address>,
    user_id: Option<String>,
    donation_amount: String,
    status: Option<Feedback>,
}

impl<T: Transport + ?Sized, W: Wallet + ?Sized> SupportPageController<T, W> {

    pub fn new(
        transport: Arc<T>,
        wallet: Option<Arc<W>>,
        initiative_id: impl Into<String>
    ) -> Result<Self, CivicError> {
        Ok(SupportPageController {
            transport,
            wallet,
            contract: Address::parse(DONATION_CONTRACT_ADDRESS)?,
            initiative_id: initiative_id.into(),
            account: None,
            user_id: None,
            donation_amount: String::new(),
            status: None,
        })
    }

    /// Resolves the donor's user id and connects the wallet.
    pub async fn mount(&mut self) {
        match AuthService::new(&*self.transport).current_user().await {
            Ok(user) => self.user_id = Some(user.id),
            Err(e) => log::error!("{}", e.message()),
        }

        let Some(wallet) = &self.wallet else {
            log::warn!("Non-Ethereum browser detected. You should consider trying MetaMask!");
            return;
        };

        match wallet.request_accounts().await {
            Ok(accounts) => self.account = accounts.into_iter().next(),
            Err(e) => log::error!("User denied account access: {}", e.message()),
        }
    }

    pub fn set_donation_amount(&mut self, amount: impl Into<String>) {
        self.donation_amount = amount.into();
    }

    pub async fn donate(&mut self) {
        let Some(call) = self.prepare_call() else {
            self.status = Some(Feedback::error(INVALID_DETAILS));
            return;
        };
        let Some(wallet) = &self.wallet else {
            self.status = Some(Feedback::error(INVALID_DETAILS));
            return;
        };

        log::info!("Donating {} wei to initiative {}", call.value_wei, self.initiative_id);

        self.status = match wallet.contract_call(call).await {
            Ok(_) => Some(Feedback::success(DONATION_SUCCEEDED)),
            Err(e) => {
                log::error!("Donation failed: {}", e.message());
                Some(Feedback::error(DONATION_FAILED))
            }
        };
    }

    fn prepare_call(&self) -> Option<ContractCall> {
        let account = self.account.as_ref()?;
        let user_id = self.user_id.as_ref().filter(|id| !id.is_empty())?;
        if self.initiative_id.is_empty() {
            return None;
        }
        let value_wei = ether_to_wei(&self.donation_amount).ok()?;

        Some(ContractCall {
            from: account.clone(),
            contract: self.contract.clone(),
            function_name: DONATE_FUNCTION.to_owned(),
            args: vec![self.initiative_id.clone(), user_id.clone()],
            value_wei,
        })
    }

    pub fn route(&self) -> String {
        routes::support(&self.initiative_id)
    }

    pub fn account(&self) -> Option<&Address> {
        self.account.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn donation_amount(&self) -> &str {
        &self.donation_amount
    }

    pub fn status(&self) -> Option<&Feedback> {
        self.status.as_ref()
    }

}
