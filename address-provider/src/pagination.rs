//!
//! Walk every page of `all_addresses`.
//!
//! A page shorter than the requested size, or an empty one, is the last page.
//!

use std::collections::HashSet;

use async_stream::try_stream;
use futures_util::{Stream, TryStreamExt};

use crate::client::AddressProviderReadOnly;
use crate::errors::{eyre, Report};
use crate::logging::debug;
use crate::msg::AddressResponseItem;

/// Page size used when callers pass `None`.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Stream all registered addresses, `page_size` entries per query.
pub fn address_stream<Q>(
    querier: &Q,
    page_size: Option<u32>,
) -> impl Stream<Item = Result<AddressResponseItem, Report>> + '_
where
    Q: AddressProviderReadOnly + Sync,
{
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    try_stream! {
        if page_size == 0 {
            Err::<(), Report>(eyre!("Page size must be positive"))?;
        }

        let mut start_after = None;
        let mut seen = HashSet::new();
        loop {
            let page = querier.all_addresses(Some(page_size), start_after).await?;
            debug!(
                contract = querier.contract_address(),
                ?start_after,
                len = page.len(),
                "Fetched address page"
            );

            let last = page.last().map(|entry| entry.contract);
            let exhausted = page.len() < page_size as usize;
            for entry in page {
                yield entry;
            }

            match last {
                Some(_) if exhausted => break,
                None => break,
                Some(contract) if !seen.insert(contract) => {
                    Err::<(), Report>(eyre!("Pagination cursor {} was already visited", contract))?;
                }
                Some(contract) => start_after = Some(contract),
            }
        }
    }
}

/// Collect every registered address into one list.
pub async fn fetch_all_addresses<Q>(
    querier: &Q,
    page_size: Option<u32>,
) -> Result<Vec<AddressResponseItem>, Report>
where
    Q: AddressProviderReadOnly + Sync,
{
    address_stream(querier, page_size).try_collect().await
}
