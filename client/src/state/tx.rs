//! In-flight flags for wallet submissions.

#[cfg(test)]
#[path = "tx_test.rs"]
mod tx_test;

/// State-changing operations the dashboard can submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxOp {
    Deploy,
    Mint,
    UpdatePrice,
    ToggleSale,
    Withdraw,
    UseTicket,
}

impl TxOp {
    /// Short name used in log lines.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Deploy => "deploy",
            Self::Mint => "mint",
            Self::UpdatePrice => "update price",
            Self::ToggleSale => "toggle sale",
            Self::Withdraw => "withdraw",
            Self::UseTicket => "use ticket",
        }
    }
}

/// One busy flag per operation. Operations never block each other.
///
/// Provided as `RwSignal<TxState>` via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TxState {
    pub deploying: bool,
    pub minting: bool,
    pub updating_price: bool,
    pub toggling_sale: bool,
    pub withdrawing: bool,
    pub using_ticket: bool,
}

impl TxState {
    #[must_use]
    pub fn is_busy(&self, op: TxOp) -> bool {
        match op {
            TxOp::Deploy => self.deploying,
            TxOp::Mint => self.minting,
            TxOp::UpdatePrice => self.updating_price,
            TxOp::ToggleSale => self.toggling_sale,
            TxOp::Withdraw => self.withdrawing,
            TxOp::UseTicket => self.using_ticket,
        }
    }

    pub fn set_busy(&mut self, op: TxOp, busy: bool) {
        let flag = match op {
            TxOp::Deploy => &mut self.deploying,
            TxOp::Mint => &mut self.minting,
            TxOp::UpdatePrice => &mut self.updating_price,
            TxOp::ToggleSale => &mut self.toggling_sale,
            TxOp::Withdraw => &mut self.withdrawing,
            TxOp::UseTicket => &mut self.using_ticket,
        };
        *flag = busy;
    }
}
