//! clap integration for the S3 URI flag surface.

use clap::Args;

use crate::uri::{S3Uri, S3UriList};

/// Repeatable `--s3-uri` flag group for host binaries.
///
/// Flatten into a `clap::Parser` struct to accept any number of validated
/// S3 URIs; invalid values are rejected at parse time with a message naming
/// the offending value.
///
/// ```
/// use clap::Parser;
/// use s3fetch_utils::S3UriArgs;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     uris: S3UriArgs,
/// }
///
/// let cli = Cli::try_parse_from(["fetch", "--s3-uri", "s3://bucket/key"]).unwrap();
/// assert_eq!(cli.uris.uri_list().len(), 1);
/// ```
#[derive(Debug, Clone, Args)]
pub struct S3UriArgs {
    /// S3 URI to fetch; may be given multiple times
    #[arg(long = "s3-uri", value_name = "URI")]
    s3_uri: Vec<S3Uri>,
}

impl S3UriArgs {
    /// The collected URIs as a list, in command-line order.
    pub fn uri_list(&self) -> S3UriList {
        self.s3_uri.iter().cloned().collect()
    }
}
