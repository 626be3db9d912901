use crate::errors::{Error, Result};
use crate::structs::{Lookup, NominationRecord};

use log::{debug, info};
use reqwest::{Client, StatusCode};

const TOP_COMMENTS: &str = "gettoptencomments";
const COMMENT_BY_LINK: &str = "GetMessageByMessageLink";

#[inline(always)]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{base_url}/{path}")
}

pub(crate) async fn get_top_comments(
    client: &Client,
    base_url: &str,
) -> Result<Vec<NominationRecord>> {
    let url = endpoint(base_url, TOP_COMMENTS);
    debug!("fetching ranked nominations from {url}");

    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status));
    }

    let records = decode_records(&response.text().await?)?;
    info!("backend returned {} nominations", records.len());
    Ok(records)
}

pub(crate) async fn get_comment_by_link(
    client: &Client,
    base_url: &str,
    message_link: &str,
) -> Result<Lookup<NominationRecord>> {
    let url = endpoint(base_url, COMMENT_BY_LINK);
    debug!("checking whether {message_link} has been nominated");

    let response = client
        .get(&url)
        .query(&[("id", message_link)])
        .send()
        .await?;
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        info!("{message_link} has not been nominated");
        return Ok(Lookup::NotFound);
    }
    if !status.is_success() {
        return Err(Error::Status(status));
    }

    decode_record(&response.text().await?)
}

/// The backend answers `null` rather than `[]` when it has nothing ranked.
pub(crate) fn decode_records(body: &str) -> Result<Vec<NominationRecord>> {
    let records: Option<Vec<NominationRecord>> = serde_json::from_str(body)?;
    Ok(records.unwrap_or_default())
}

pub(crate) fn decode_record(body: &str) -> Result<Lookup<NominationRecord>> {
    if body.trim().is_empty() {
        return Ok(Lookup::NotFound);
    }
    let record: Option<NominationRecord> = serde_json::from_str(body)?;
    Ok(record.into())
}
