mod common;

use anyhow::Result;
use conduit::{Conduit, Params};
use serde_json::json;

use crate::common::FakeConduit;

#[tokio::test]
async fn test_dotted_path_matches_accessed_segments() -> Result<()> {
    let server = FakeConduit::start(vec![json!({"result": null})]).await?;
    let conduit = Conduit::new(&server.url, "cli-token")?;

    conduit
        .method("differential")
        .extend("revision")
        .extend("search")
        .call(Params::new())
        .await?;

    let calls = server.calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "differential.revision.search");
    Ok(())
}

#[tokio::test]
async fn test_single_segment_path() -> Result<()> {
    let server = FakeConduit::start(vec![json!({"result": true})]).await?;
    let conduit = Conduit::new(&server.url, "cli-token")?;

    conduit.method("ping").call(Params::new()).await?;

    assert_eq!(server.calls().await[0].method, "ping");
    Ok(())
}

#[tokio::test]
async fn test_method_path_escape_hatch() -> Result<()> {
    let server = FakeConduit::start(vec![json!({"result": null})]).await?;
    let conduit = Conduit::new(&server.url, "cli-token")?;

    conduit
        .method_path(["harbormaster", "build", "search"])
        .call(Params::new())
        .await?;

    assert_eq!(server.calls().await[0].method, "harbormaster.build.search");
    Ok(())
}

#[tokio::test]
async fn test_token_first_then_parameters_in_order() -> Result<()> {
    let server = FakeConduit::start(vec![json!({"result": null})]).await?;
    let conduit = Conduit::new(&server.url, "cli-token")?;

    let mut params = Params::new();
    params.insert("a".into(), json!(1));
    params.insert("b".into(), json!(2));
    conduit.method("echo").call(params).await?;

    let calls = server.calls().await;
    assert_eq!(
        calls[0].fields,
        vec![
            ("api.token".to_string(), "cli-token".to_string()),
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_caller_supplied_token_overwrites() -> Result<()> {
    let server = FakeConduit::start(vec![json!({"result": null})]).await?;
    let conduit = Conduit::new(&server.url, "cli-token")?;

    let mut params = Params::new();
    params.insert("api.token".into(), json!("their-token"));
    conduit.method("echo").call(params).await?;

    let calls = server.calls().await;
    assert_eq!(
        calls[0].fields,
        vec![("api.token".to_string(), "their-token".to_string())]
    );
    Ok(())
}

#[tokio::test]
async fn test_nested_parameters_use_bracketed_keys() -> Result<()> {
    let server = FakeConduit::start(vec![json!({"result": null})]).await?;
    let conduit = Conduit::new(&server.url, "cli-token")?;

    let mut params = Params::new();
    params.insert(
        "constraints".into(),
        json!({"ids": [1, 2], "query": "flux"}),
    );
    conduit
        .method("differential")
        .extend("revision")
        .extend("search")
        .call(params)
        .await?;

    let calls = server.calls().await;
    assert_eq!(
        calls[0].fields,
        vec![
            ("api.token".to_string(), "cli-token".to_string()),
            ("constraints[ids][0]".to_string(), "1".to_string()),
            ("constraints[ids][1]".to_string(), "2".to_string()),
            ("constraints[query]".to_string(), "flux".to_string()),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_sibling_handles_from_one_parent() -> Result<()> {
    let server =
        FakeConduit::start(vec![json!({"result": null}), json!({"result": null})]).await?;
    let conduit = Conduit::new(&server.url, "cli-token")?;

    let parent = conduit.method("differential");
    let revisions = parent.extend("revision").extend("search");
    let diffs = parent.extend("diff").extend("search");

    revisions.call(Params::new()).await?;
    diffs.call(Params::new()).await?;

    let calls = server.calls().await;
    assert_eq!(calls[0].method, "differential.revision.search");
    assert_eq!(calls[1].method, "differential.diff.search");
    assert_eq!(parent.name(), "differential");
    Ok(())
}
