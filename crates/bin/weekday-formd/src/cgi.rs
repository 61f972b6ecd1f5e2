//! CGI mode — answer exactly one request on standard output.
//!
//! The web server passes request metadata through environment variables and
//! reads the response (header lines, a blank line, the body) from stdout.

use std::io::{self, Write};

use weekday_form_adapter_http_axum::error::{INTERNAL_ERROR_BODY, RenderError};

/// Whether the process was launched by a web server as a CGI script.
pub fn is_cgi<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup("GATEWAY_INTERFACE").is_some()
}

/// The parts of the CGI request environment that shape the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CgiRequest {
    method: String,
    path_info: String,
}

impl CgiRequest {
    /// Read the request from environment variables; a missing
    /// `REQUEST_METHOD` counts as `GET`, a missing `PATH_INFO` as the page root.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            method: lookup("REQUEST_METHOD").unwrap_or_else(|| "GET".to_string()),
            path_info: lookup("PATH_INFO").unwrap_or_default(),
        }
    }

    fn is_head(&self) -> bool {
        self.method.eq_ignore_ascii_case("HEAD")
    }

    fn is_readable(&self) -> bool {
        self.is_head() || self.method.eq_ignore_ascii_case("GET")
    }

    fn targets_page(&self) -> bool {
        matches!(self.path_info.as_str(), "" | "/")
    }
}

/// Write the CGI response for `request` to `out`.
///
/// `render` runs only when the request targets the page with `GET` or `HEAD`;
/// other paths answer `404`, other methods `405`.
///
/// # Errors
///
/// Returns an I/O error when `out` cannot be written.
pub fn write_response<W, R>(out: &mut W, request: &CgiRequest, render: R) -> io::Result<()>
where
    W: Write,
    R: FnOnce() -> Result<String, RenderError>,
{
    if !request.targets_page() {
        tracing::debug!(path_info = %request.path_info, "no such path");
        return write_plain(out, request, "404 Not Found", None, "not found");
    }
    if !request.is_readable() {
        tracing::debug!(method = %request.method, "method not allowed");
        return write_plain(
            out,
            request,
            "405 Method Not Allowed",
            Some("GET, HEAD"),
            "method not allowed",
        );
    }

    match render() {
        Ok(body) => write_parts(out, request, None, "text/html; charset=utf-8", None, &body),
        Err(err) => {
            tracing::error!(error = ?err, "page rendering failed");
            write_plain(
                out,
                request,
                "500 Internal Server Error",
                None,
                INTERNAL_ERROR_BODY,
            )
        }
    }
}

fn write_plain<W: Write>(
    out: &mut W,
    request: &CgiRequest,
    status: &str,
    allow: Option<&str>,
    body: &str,
) -> io::Result<()> {
    write_parts(
        out,
        request,
        Some(status),
        "text/plain; charset=utf-8",
        allow,
        body,
    )
}

fn write_parts<W: Write>(
    out: &mut W,
    request: &CgiRequest,
    status: Option<&str>,
    content_type: &str,
    allow: Option<&str>,
    body: &str,
) -> io::Result<()> {
    if let Some(status) = status {
        writeln!(out, "Status: {status}")?;
    }
    if let Some(allow) = allow {
        writeln!(out, "Allow: {allow}")?;
    }
    writeln!(out, "Content-Type: {content_type}")?;
    writeln!(out, "Content-Length: {}", body.len())?;
    writeln!(out, "Cache-Control: no-store")?;
    writeln!(out)?;
    if !request.is_head() {
        out.write_all(body.as_bytes())?;
    }
    out.flush()
}
