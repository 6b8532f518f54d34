//! S3 helpers for the deployment artifact bucket.

use aws_sdk_s3::Client;

use crate::Error;

/// True when the bucket answers a HEAD request.
pub async fn bucket_exists(client: &Client, bucket: &str) -> bool {
    client.head_bucket().bucket(bucket).send().await.is_ok()
}

/// Empties the bucket page by page, then removes it.
///
/// S3 refuses to delete a non-empty bucket, so every remaining object is
/// deleted first.
pub async fn delete_bucket(client: &Client, bucket: &str) -> Result<(), Error> {
    let mut continuation_token: Option<String> = None;

    loop {
        let listed = client
            .list_objects_v2()
            .bucket(bucket)
            .set_continuation_token(continuation_token.take())
            .send()
            .await?;

        for object in listed.contents() {
            if let Some(key) = object.key() {
                client
                    .delete_object()
                    .bucket(bucket)
                    .key(key)
                    .send()
                    .await?;
            }
        }

        match listed.next_continuation_token() {
            Some(token) => continuation_token = Some(token.to_string()),
            None => break,
        }
    }

    client.delete_bucket().bucket(bucket).send().await?;
    Ok(())
}
