use crate::*;

/// External custodian of the utility-token balance
///
/// The contract account is topped up administratively, before any elections
/// exist. No election or vote path depends on the outcome of a funding
/// call - this seam exists so deployment tooling can be driven through the
/// same crate without the core knowing the transfer protocol.
pub trait FundingSource {
    /// Ask the custodian to transfer `amount` to `target`
    ///
    /// Returns whether the transfer confirmed.
    fn request_funding(&mut self, target: &AccountId, amount: u64) -> bool;
}

/// Request funding, failing if the custodian declines
pub fn ensure_funded<F: FundingSource>(
    custodian: &mut F,
    target: &AccountId,
    amount: u64,
) -> Result<(), Error> {
    if !custodian.request_funding(target, amount) {
        return Err(Error::FundingDeclined);
    }

    log::debug!("simpleballot: funded {} with {}", target, amount);
    Ok(())
}
