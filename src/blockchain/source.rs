// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Paginated coin queries.
//!
//! [`CoinSource`] is the one ledger capability the payment engine needs: list
//! an owner's coins of one type, a page at a time. [`coin_stream`] turns that
//! into a lazy stream of individual coins that fetches the next page only
//! when the previous one has been consumed.

use async_trait::async_trait;
use futures::stream::{self, Stream, TryStreamExt};

use super::client::SuiClientError;
use super::types::{CoinPage, CoinRecord};

/// Source of an owner's coins, one page per call.
#[async_trait]
pub trait CoinSource: Send + Sync {
    /// Fetch the page of `coin_type` coins owned by `owner` that starts at
    /// `cursor`. A `None` cursor starts from the first page.
    async fn get_coins(
        &self,
        owner: &str,
        coin_type: &str,
        cursor: Option<String>,
    ) -> Result<CoinPage, SuiClientError>;
}

enum Cursor {
    Start,
    At(String),
    Done,
}

/// Lazily page through every `coin_type` coin owned by `owner`.
///
/// Pages are requested strictly one after another. Each call starts again
/// from the first page; the stream holds no state beyond the cursor.
pub fn coin_stream<'a, S>(
    source: &'a S,
    owner: &'a str,
    coin_type: &'a str,
) -> impl Stream<Item = Result<CoinRecord, SuiClientError>> + Send + 'a
where
    S: CoinSource + ?Sized,
{
    stream::try_unfold(Cursor::Start, move |cursor| async move {
        let cursor = match cursor {
            Cursor::Start => None,
            Cursor::At(cursor) => Some(cursor),
            Cursor::Done => return Ok::<_, SuiClientError>(None),
        };

        let page = source.get_coins(owner, coin_type, cursor).await?;
        tracing::trace!(
            owner,
            coin_type,
            coins = page.data.len(),
            has_next_page = page.has_next_page,
            "Fetched coin page"
        );

        let next = match (page.has_next_page, page.next_cursor) {
            (true, Some(cursor)) => Cursor::At(cursor),
            (true, None) => {
                tracing::warn!(owner, coin_type, "Coin page has more data but no cursor");
                return Err(SuiClientError::Decode(
                    "hasNextPage without nextCursor".to_string(),
                ));
            }
            (false, _) => Cursor::Done,
        };
        Ok(Some((page.data, next)))
    })
    .map_ok(|coins| stream::iter(coins.into_iter().map(Ok)))
    .try_flatten()
}


#[cfg(test)]
mod tests {
    use futures::{StreamExt, TryStreamExt};

    use super::testing::{coin, FakeCoinSource};
    use super::*;

    #[tokio::test]
    async fn stream_yields_coins_across_pages_in_order() {
        let source = FakeCoinSource::new(vec![
            vec![coin("0x1", 1), coin("0x2", 2)],
            vec![coin("0x3", 3)],
            vec![coin("0x4", 4)],
        ]);

        let coins: Vec<CoinRecord> = coin_stream(&source, "0xowner", "0xabc::token::TOKEN")
            .try_collect()
            .await
            .unwrap();

        let ids: Vec<&str> = coins.iter().map(|c| c.coin_object_id.0.as_str()).collect();
        assert_eq!(ids, ["0x1", "0x2", "0x3", "0x4"]);
        assert_eq!(
            source.cursors(),
            vec![None, Some("page-1".to_string()), Some("page-2".to_string())]
        );
    }

    #[tokio::test]
    async fn stream_is_lazy() {
        let source = FakeCoinSource::new(vec![vec![coin("0x1", 1)], vec![coin("0x2", 2)]]);

        let mut coins = Box::pin(coin_stream(&source, "0xowner", "0xabc::token::TOKEN"));
        assert_eq!(source.call_count(), 0);

        let first = coins.next().await.unwrap().unwrap();
        assert_eq!(first.coin_object_id.0, "0x1");
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn stream_restarts_from_first_page() {
        let source = FakeCoinSource::new(vec![vec![coin("0x1", 1)], vec![coin("0x2", 2)]]);

        for _ in 0..2 {
            let coins: Vec<CoinRecord> = coin_stream(&source, "0xowner", "0xabc::token::TOKEN")
                .try_collect()
                .await
                .unwrap();
            assert_eq!(coins.len(), 2);
        }
        assert_eq!(
            source.cursors(),
            vec![None, Some("page-1".to_string()), None, Some("page-1".to_string())]
        );
    }

    #[tokio::test]
    async fn stream_propagates_page_error() {
        let source =
            FakeCoinSource::new(vec![vec![coin("0x1", 1)], vec![coin("0x2", 2)]]).failing_at(1);

        let result: Result<Vec<CoinRecord>, _> =
            coin_stream(&source, "0xowner", "0xabc::token::TOKEN")
                .try_collect()
                .await;

        assert!(matches!(result, Err(SuiClientError::Rpc { code: -32000, .. })));
    }

    #[tokio::test]
    async fn stream_skips_empty_pages() {
        let source = FakeCoinSource::new(vec![vec![], vec![coin("0x2", 2)]]);

        let coins: Vec<CoinRecord> = coin_stream(&source, "0xowner", "0xabc::token::TOKEN")
            .try_collect()
            .await
            .unwrap();

        assert_eq!(coins.len(), 1);
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn stream_fails_when_more_pages_have_no_cursor() {
        let source = FakeCoinSource::new(vec![vec![coin("0x1", 30)], vec![coin("0x2", 50)]])
            .dropping_cursor_at(0);

        let result: Result<Vec<CoinRecord>, _> =
            coin_stream(&source, "0xowner", "0xabc::token::TOKEN")
                .try_collect()
                .await;

        assert!(matches!(result, Err(SuiClientError::Decode(_))));
        assert_eq!(source.call_count(), 1);
    }
}
