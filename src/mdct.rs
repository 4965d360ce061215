//! MDCT analysis and IMDCT synthesis windows
//!
//! ATRAC9 frames are 64, 128 or 256 samples long (frame-size power 6, 7
//! or 8). The analysis window is a raised half-cosine; the synthesis window
//! is derived from it so that windowed analysis followed by windowed
//! overlap-add reconstructs the input exactly.

use std::f64::consts::PI;

use crate::error::{TableError, TableResult};
use crate::types::FRAME_SIZE_POWERS;

/// Analysis and synthesis window for one frame size
#[derive(Debug, Clone, PartialEq)]
pub struct WindowPair {
    pub frame_size_power: u8,
    pub analysis: Vec<f64>,
    pub synthesis: Vec<f64>,
}

impl WindowPair {
    pub fn new(frame_size_power: u8) -> TableResult<Self> {
        let analysis = mdct_window(frame_size_power)?;
        let synthesis = synthesis_from_analysis(&analysis);
        Ok(Self {
            frame_size_power,
            analysis,
            synthesis,
        })
    }

    pub fn len(&self) -> usize {
        self.analysis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analysis.is_empty()
    }
}

fn check_power(frame_size_power: u8) -> TableResult<usize> {
    if !FRAME_SIZE_POWERS.contains(&frame_size_power) {
        return Err(TableError::out_of_range(
            "frame size power",
            frame_size_power as usize,
            "6, 7 or 8",
        ));
    }
    Ok(1 << frame_size_power)
}

/// MDCT analysis window: `0.5 * (sin(((i + 0.5) / N - 0.5) * PI) + 1)`
pub fn mdct_window(frame_size_power: u8) -> TableResult<Vec<f64>> {
    let frame_size = check_power(frame_size_power)?;
    Ok((0..frame_size)
        .map(|i| ((((i as f64 + 0.5) / frame_size as f64 - 0.5) * PI).sin() + 1.0) * 0.5)
        .collect())
}

/// IMDCT synthesis window: `w[i] / (w[N-1-i]^2 + w[i]^2)`
pub fn imdct_window(frame_size_power: u8) -> TableResult<Vec<f64>> {
    Ok(synthesis_from_analysis(&mdct_window(frame_size_power)?))
}

fn synthesis_from_analysis(analysis: &[f64]) -> Vec<f64> {
    let n = analysis.len();
    (0..n)
        .map(|i| {
            let mirror = analysis[n - 1 - i];
            analysis[i] / (mirror * mirror + analysis[i] * analysis[i])
        })
        .collect()
}

/// Windows for every supported frame size, in power order 6, 7, 8
pub(crate) fn build_windows() -> TableResult<Vec<WindowPair>> {
    let windows = FRAME_SIZE_POWERS
        .iter()
        .map(|&power| WindowPair::new(power))
        .collect::<TableResult<Vec<_>>>()?;
    log::debug!("Built MDCT/IMDCT windows for {} frame sizes", windows.len());
    Ok(windows)
}
