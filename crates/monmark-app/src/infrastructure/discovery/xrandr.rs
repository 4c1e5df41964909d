//! Display discovery via the `xrandr` executable.
//!
//! Runs `xrandr` with no arguments and picks out the connected-output lines:
//!
//! ```text
//! eDP-1 connected primary 1920x1080+0+0 (normal left inverted ...) 344mm x 194mm
//! HDMI-0 connected 1920x1080+1920+0 (normal left inverted ...) 527mm x 296mm
//! DP-1 disconnected (normal left inverted right x axis y axis)
//! ```
//!
//! Each matching line yields one [`DisplayPlacement`] with the output name,
//! the `WxH+X+Y` desktop geometry, and the `primary` flag.  Everything else
//! (header line, disconnected outputs, indented mode lists, connected but
//! disabled outputs without a geometry) is skipped, so the parser stays
//! tolerant of xrandr's many output variations.

use std::process::Command;

use monmark_core::DisplayPlacement;
use tracing::{debug, info};

use super::{DiscoveryError, DisplayDiscovery};

const XRANDR: &str = "xrandr";

/// Production discovery adapter backed by the `xrandr` CLI.
pub struct XrandrDiscovery;

impl XrandrDiscovery {
    /// Creates a new `XrandrDiscovery`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for XrandrDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayDiscovery for XrandrDiscovery {
    fn discover(&self) -> Result<Vec<DisplayPlacement>, DiscoveryError> {
        let output = Command::new(XRANDR).output().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                DiscoveryError::MissingExecutable(XRANDR)
            } else {
                DiscoveryError::Io {
                    command: XRANDR,
                    source,
                }
            }
        })?;

        if !output.status.success() {
            return Err(DiscoveryError::CommandFailed {
                command: XRANDR,
                status: output.status,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let placements = parse_xrandr_output(&stdout);

        if placements.is_empty() {
            return Err(DiscoveryError::NoDisplays);
        }

        info!(count = placements.len(), "displays discovered via xrandr");
        Ok(placements)
    }
}

/// Parses a full xrandr transcript into placements, in output order.
pub fn parse_xrandr_output(transcript: &str) -> Vec<DisplayPlacement> {
    transcript
        .lines()
        .filter_map(|line| {
            let placement = parse_output_line(line);
            if placement.is_none() && line.contains(" connected") {
                // Connected but disabled outputs carry no geometry token.
                debug!(line, "skipping connected output without geometry");
            }
            placement
        })
        .collect()
}

/// Parses one xrandr line; `None` for anything that is not an active
/// connected output.
fn parse_output_line(line: &str) -> Option<DisplayPlacement> {
    // Mode lines are indented; output lines start at column 0.
    if line.starts_with(char::is_whitespace) {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;
    if tokens.next()? != "connected" {
        return None;
    }

    let mut token = tokens.next()?;
    let is_primary = token == "primary";
    if is_primary {
        token = tokens.next()?;
    }

    let (width, height, x_offset, y_offset) = parse_geometry(token)?;

    Some(DisplayPlacement {
        name: name.to_string(),
        width,
        height,
        x_offset,
        y_offset,
        is_primary,
    })
}

/// Parses a `WxH+X+Y` geometry token, e.g. `1920x1080+1920+0`.
fn parse_geometry(token: &str) -> Option<(u32, u32, i32, i32)> {
    let (size, offsets) = token.split_once('+')?;
    let (x, y) = offsets.split_once('+')?;
    let (w, h) = size.split_once('x')?;

    let width: u32 = w.parse().ok()?;
    let height: u32 = h.parse().ok()?;
    if width == 0 || height == 0 {
        return None;
    }

    Some((width, height, x.parse().ok()?, y.parse().ok()?))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Captured from a laptop with an external monitor to the right.
    const TRANSCRIPT: &str = "\
Screen 0: minimum 8 x 8, current 3840 x 1080, maximum 32767 x 32767
eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 194mm
   1920x1080     60.01*+  59.97    59.96    59.93    48.00
   1680x1050     59.95    59.88
HDMI-0 connected 1920x1080+1920+0 (normal left inverted right x axis y axis) 527mm x 296mm
   1920x1080     60.00*+  50.00    59.94
DP-1 disconnected (normal left inverted right x axis y axis)
DP-2 disconnected (normal left inverted right x axis y axis)
";

    #[test]
    fn test_parse_transcript_yields_connected_outputs_in_order() {
        let placements = parse_xrandr_output(TRANSCRIPT);
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].name, "eDP-1");
        assert_eq!(placements[1].name, "HDMI-0");
    }

    #[test]
    fn test_parse_primary_output_line() {
        let placements = parse_xrandr_output(TRANSCRIPT);
        let edp = &placements[0];
        assert_eq!(
            (edp.width, edp.height, edp.x_offset, edp.y_offset),
            (1920, 1080, 0, 0)
        );
        assert!(edp.is_primary);
    }

    #[test]
    fn test_parse_non_primary_output_line() {
        let placements = parse_xrandr_output(TRANSCRIPT);
        let hdmi = &placements[1];
        assert_eq!(
            (hdmi.width, hdmi.height, hdmi.x_offset, hdmi.y_offset),
            (1920, 1080, 1920, 0)
        );
        assert!(!hdmi.is_primary);
    }

    #[test]
    fn test_disconnected_outputs_are_skipped() {
        let placements = parse_xrandr_output(TRANSCRIPT);
        assert!(placements.iter().all(|p| !p.name.starts_with("DP-")));
    }

    #[test]
    fn test_connected_but_disabled_output_is_skipped() {
        // No geometry token between "connected" and the rotation list.
        let line = "HDMI-1 connected (normal left inverted right x axis y axis)";
        assert_eq!(parse_output_line(line), None);
    }

    #[test]
    fn test_parse_geometry_with_offsets() {
        assert_eq!(
            parse_geometry("2560x1440+1920+360"),
            Some((2560, 1440, 1920, 360))
        );
    }

    #[test]
    fn test_parse_geometry_rejects_zero_sized_mode() {
        assert_eq!(parse_geometry("0x0+0+0"), None);
    }

    #[test]
    fn test_parse_geometry_rejects_malformed_tokens() {
        assert_eq!(parse_geometry("1920x1080"), None);
        assert_eq!(parse_geometry("primary"), None);
        assert_eq!(parse_geometry("(normal"), None);
    }

    #[test]
    fn test_parse_output_line_ignores_indented_mode_lines() {
        assert_eq!(parse_output_line("   1920x1080     60.01*+  59.97"), None);
    }

    #[test]
    fn test_parse_output_line_ignores_screen_header() {
        assert_eq!(
            parse_output_line("Screen 0: minimum 8 x 8, current 3840 x 1080, maximum 32767 x 32767"),
            None
        );
    }
}
