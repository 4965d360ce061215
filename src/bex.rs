//! Bandwidth-extension (BEX) parameter set
//!
//! For each extension mode and band-count bucket the bitstream carries up to
//! four small values. This module says how many there are, how wide each
//! one is, and which curves turn them into an extension envelope. The
//! envelope reconstruction itself happens in the decoder.

use crate::error::{TableError, TableResult};

/// Extension modes 0..4
pub const BEX_MODES: usize = 5;
/// Band-count buckets 0..5
pub const BEX_BUCKETS: usize = 6;
/// Most values a single mode/bucket pair transmits
pub const BEX_MAX_VALUES: usize = 4;

/// Values transmitted per `[mode][bucket]`
pub const BEX_ENCODED_VALUE_COUNTS: [[u8; BEX_BUCKETS]; BEX_MODES] = [
    [0, 0, 0, 4, 4, 2],
    [0, 0, 0, 0, 0, 0],
    [0, 0, 0, 2, 2, 1],
    [0, 0, 0, 2, 2, 2],
    [1, 1, 1, 0, 0, 0],
];

/// Bit width per `[mode][bucket][value]`
pub static BEX_DATA_LENGTHS: [[[u8; BEX_MAX_VALUES]; BEX_BUCKETS]; BEX_MODES] = [
    [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [5, 4, 3, 3], [4, 4, 3, 4], [4, 5, 0, 0]],
    [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [6, 6, 0, 0], [6, 6, 0, 0], [6, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [4, 4, 0, 0], [4, 4, 0, 0], [4, 4, 0, 0]],
    [[3, 0, 0, 0], [3, 0, 0, 0], [3, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
];

/// Mode 0 interpolation tables for three extension bands
pub const BEX_MODE0_BANDS3: [&[f64]; 5] = [
    &[
        0.000000e+0, 1.988220e-1, 2.514343e-1, 2.960510e-1, 3.263550e-1, 3.771362e-1, 3.786926e-1, 4.540405e-1,
        4.877625e-1, 5.262451e-1, 5.447083e-1, 5.737000e-1, 6.212158e-1, 6.222839e-1, 6.560974e-1, 6.896667e-1,
        7.555542e-1, 7.677917e-1, 7.918091e-1, 7.971497e-1, 8.188171e-1, 8.446045e-1, 9.790649e-1, 9.822083e-1,
        9.846191e-1, 9.859314e-1, 9.863586e-1, 9.863892e-1, 9.873352e-1, 9.881287e-1, 9.898682e-1, 9.913330e-1,
    ],
    &[
        0.000000e+0, 9.982910e-1, 7.592773e-2, 7.179565e-1, 9.851379e-1, 5.340271e-1, 9.013672e-1, 6.349182e-1,
        7.226257e-1, 1.948547e-1, 7.628174e-1, 9.873657e-1, 8.112183e-1, 2.715454e-1, 9.734192e-1, 1.443787e-1,
        4.640198e-1, 3.249207e-1, 3.790894e-1, 8.276367e-2, 5.954590e-1, 2.864380e-1, 9.806824e-1, 7.929077e-1,
        6.292114e-1, 4.887085e-1, 2.905273e-1, 1.301880e-1, 3.140869e-1, 5.482483e-1, 4.210815e-1, 1.182861e-1,
    ],
    &[
        0.000000e+0, 3.155518e-2, 8.581543e-2, 1.364746e-1, 1.858826e-1, 2.368469e-1, 2.888184e-1, 3.432617e-1,
        4.012451e-1, 4.623108e-1, 5.271301e-1, 5.954895e-1, 6.681213e-1, 7.448425e-1, 8.245239e-1, 9.097290e-1,
    ],
    &[
        0.000000e+0, 4.418945e-2, 1.303711e-1, 2.273560e-1, 3.395996e-1, 4.735718e-1, 6.267090e-1, 8.003845e-1,
    ],
    &[
        0.000000e+0, 2.804565e-2, 9.683228e-2, 1.849976e-1, 3.005981e-1, 4.470520e-1, 6.168518e-1, 8.007813e-1,
    ],
];

/// Mode 0 interpolation tables for four extension bands
pub const BEX_MODE0_BANDS4: [&[f64]; 5] = [
    &[
        0.000000e+0, 2.708740e-1, 3.479614e-1, 3.578186e-1, 5.083618e-1, 5.299072e-1, 5.819092e-1, 6.381836e-1,
        7.276917e-1, 7.595520e-1, 7.878723e-1, 9.707336e-1, 9.713135e-1, 9.736023e-1, 9.759827e-1, 9.832458e-1,
    ],
    &[
        0.000000e+0, 2.330627e-1, 5.891418e-1, 7.170410e-1, 2.036438e-1, 1.613464e-1, 6.668701e-1, 9.481201e-1,
        9.769897e-1, 5.111694e-1, 3.522644e-1, 8.209534e-1, 2.933960e-1, 9.757690e-1, 5.289917e-1, 4.372253e-1,
    ],
    &[
        0.000000e+0, 4.360962e-2, 1.056519e-1, 1.590576e-1, 2.078857e-1, 2.572937e-1, 3.082581e-1, 3.616028e-1,
        4.191589e-1, 4.792175e-1, 5.438538e-1, 6.125183e-1, 6.841125e-1, 7.589417e-1, 8.365173e-1, 9.148254e-1,
    ],
    &[
        0.000000e+0, 4.074097e-2, 1.164551e-1, 2.077026e-1, 3.184509e-1, 4.532166e-1, 6.124268e-1, 7.932129e-1,
    ],
    &[
        0.000000e+0, 8.880615e-3, 2.932739e-2, 5.593872e-2, 8.825684e-2, 1.259155e-1, 1.721497e-1, 2.270813e-1,
        2.901611e-1, 3.579712e-1, 4.334106e-1, 5.147095e-1, 6.023254e-1, 6.956177e-1, 7.952881e-1, 8.977356e-1,
    ],
];

/// Mode 0 interpolation tables for five extension bands
pub const BEX_MODE0_BANDS5: [&[f64]; 3] = [
    &[
        0.000000e+0, 7.379150e-2, 1.806335e-1, 2.687073e-1, 3.407898e-1, 4.047546e-1, 4.621887e-1, 5.168762e-1,
        5.703125e-1, 6.237488e-1, 6.763611e-1, 7.288208e-1, 7.808533e-1, 8.337708e-1, 8.874512e-1, 9.418030e-1,
    ],
    &[
        0.000000e+0, 7.980347e-2, 1.615295e-1, 1.665649e-1, 1.822205e-1, 2.185669e-1, 2.292175e-1, 2.456665e-1,
        2.666321e-1, 3.306580e-1, 3.330688e-1, 3.765259e-1, 4.085083e-1, 4.400024e-1, 4.407654e-1, 4.817505e-1,
        4.924011e-1, 5.320740e-1, 5.893860e-1, 6.131287e-1, 6.212463e-1, 6.278076e-1, 6.308899e-1, 7.660828e-1,
        7.850647e-1, 7.910461e-1, 7.929382e-1, 8.038330e-1, 9.834900e-1, 9.846191e-1, 9.852295e-1, 9.862671e-1,
    ],
    &[
        0.000000e+0, 6.084290e-1, 3.672791e-1, 3.151855e-1, 1.488953e-1, 2.571716e-1, 5.103455e-1, 3.311157e-1,
        5.426025e-2, 4.254456e-1, 7.998352e-1, 7.873230e-1, 5.418701e-1, 2.925110e-1, 8.468628e-2, 1.410522e-1,
        9.819641e-1, 9.609070e-1, 3.530884e-2, 9.729004e-2, 5.758362e-1, 9.941711e-1, 7.215576e-1, 7.183228e-1,
        2.028809e-1, 9.588623e-2, 2.032166e-1, 1.338806e-1, 5.003357e-1, 1.874390e-1, 9.804993e-1, 1.107788e-1,
    ],
];

/// Mode 2 scale curve, monotone increasing
pub const BEX_MODE2_SCALE: [f64; 64] = [
    4.272461e-4, 1.312256e-3, 2.441406e-3, 3.692627e-3, 4.913330e-3, 6.134033e-3, 7.507324e-3, 8.972168e-3,
    1.049805e-2, 1.223755e-2, 1.406860e-2, 1.599121e-2, 1.800537e-2, 2.026367e-2, 2.264404e-2, 2.517700e-2,
    2.792358e-2, 3.073120e-2, 3.344727e-2, 3.631592e-2, 3.952026e-2, 4.275513e-2, 4.608154e-2, 4.968262e-2,
    5.355835e-2, 5.783081e-2, 6.195068e-2, 6.677246e-2, 7.196045e-2, 7.745361e-2, 8.319092e-2, 8.993530e-2,
    9.759521e-2, 1.056213e-1, 1.138916e-1, 1.236267e-1, 1.348267e-1, 1.470337e-1, 1.603394e-1, 1.755676e-1,
    1.905823e-1, 2.071228e-1, 2.245178e-1, 2.444153e-1, 2.658997e-1, 2.897644e-1, 3.146057e-1, 3.450012e-1,
    3.766174e-1, 4.122620e-1, 4.505615e-1, 4.893799e-1, 5.305481e-1, 5.731201e-1, 6.157837e-1, 6.580811e-1,
    6.985168e-1, 7.435303e-1, 7.865906e-1, 8.302612e-1, 8.718567e-1, 9.125671e-1, 9.575806e-1, 9.996643e-1,
];

/// Mode 3 envelope start values
pub const BEX_MODE3_INITIAL: [f64; 16] = [
    3.491211e-1, 5.371094e-1, 6.782227e-1, 7.910156e-1, 9.057617e-1, 1.024902e+0, 1.156250e+0, 1.290527e+0,
    1.458984e+0, 1.664551e+0, 1.929688e+0, 2.278320e+0, 2.831543e+0, 3.659180e+0, 5.257813e+0, 8.373047e+0,
];

/// Mode 3 per-band decay rates
pub const BEX_MODE3_RATE: [f64; 16] = [
    -2.913818e-1, -2.541504e-1, -1.664429e-1, -1.476440e-1, -1.342163e-1, -1.220703e-1, -1.117554e-1, -1.026611e-1,
    -9.436035e-2, -8.483887e-2, -7.476807e-2, -6.304932e-2, -4.492188e-2, -2.447510e-2, 1.831055e-4, 4.174805e-2,
];

pub const BEX_MODE4_MULTIPLIER: [f64; 8] = [
    3.610229e-2, 1.260681e-1, 2.227478e-1, 3.338318e-1, 4.662170e-1, 6.221313e-1, 7.989197e-1, 9.939575e-1,
];

/// How the decoder turns the transmitted values into an envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize))]
pub enum BexEnvelope {
    /// Nothing is transmitted for this mode/bucket
    None,
    /// Mode 0: per-band levels read from interpolation tables
    Interpolated,
    /// Mode 2: values index one monotone scale curve
    Scaled,
    /// Mode 3: start value with a geometric decay rate
    Decaying,
    /// Mode 4: one value indexes a multiplier curve
    Multiplied,
}

/// One curve and the transmitted value that indexes it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BexCurve {
    pub value: usize,
    pub table: &'static [f64],
}

const fn curve(value: usize, table: &'static [f64]) -> BexCurve {
    BexCurve { value, table }
}

const MODE0_BANDS3_CURVES: &[BexCurve] = &[
    curve(0, BEX_MODE0_BANDS3[0]),
    curve(0, BEX_MODE0_BANDS3[1]),
    curve(1, BEX_MODE0_BANDS3[2]),
    curve(2, BEX_MODE0_BANDS3[3]),
    curve(3, BEX_MODE0_BANDS3[4]),
];

const MODE0_BANDS4_CURVES: &[BexCurve] = &[
    curve(0, BEX_MODE0_BANDS4[0]),
    curve(0, BEX_MODE0_BANDS4[1]),
    curve(1, BEX_MODE0_BANDS4[2]),
    curve(2, BEX_MODE0_BANDS4[3]),
    curve(3, BEX_MODE0_BANDS4[4]),
];

const MODE0_BANDS5_CURVES: &[BexCurve] = &[
    curve(0, BEX_MODE0_BANDS5[0]),
    curve(1, BEX_MODE0_BANDS5[1]),
    curve(1, BEX_MODE0_BANDS5[2]),
];

const NO_CURVES: &[BexCurve] = &[];
const MODE2_CURVES: &[BexCurve] = &[curve(0, &BEX_MODE2_SCALE), curve(1, &BEX_MODE2_SCALE)];
const MODE2_SINGLE_CURVE: &[BexCurve] = &[curve(0, &BEX_MODE2_SCALE)];
const MODE3_CURVES: &[BexCurve] = &[curve(0, &BEX_MODE3_INITIAL), curve(1, &BEX_MODE3_RATE)];
const MODE4_CURVES: &[BexCurve] = &[curve(0, &BEX_MODE4_MULTIPLIER)];

/// Extension data layout for one (mode, bucket) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BexParameterSet {
    pub mode: usize,
    pub bucket: usize,
    pub envelope: BexEnvelope,
    value_bits: &'static [u8],
    curves: &'static [BexCurve],
}

impl BexParameterSet {
    /// Number of values the bitstream carries
    pub fn value_count(&self) -> usize {
        self.value_bits.len()
    }

    /// Bit width of each transmitted value
    pub fn value_bits(&self) -> &'static [u8] {
        self.value_bits
    }

    /// Total extension bits read from the bitstream
    pub fn total_bits(&self) -> u32 {
        self.value_bits.iter().map(|&bits| bits as u32).sum()
    }

    /// Curves in the order the decoder applies them
    pub fn curves(&self) -> &'static [BexCurve] {
        self.curves
    }

    /// Curves indexed by the given transmitted value
    pub fn curves_for_value(&self, value: usize) -> impl Iterator<Item = &'static [f64]> {
        self.curves
            .iter()
            .filter(move |curve| curve.value == value)
            .map(|curve| curve.table)
    }

    /// True when the mode transmits nothing
    pub fn is_noop(&self) -> bool {
        self.value_bits.is_empty()
    }
}

/// Look up the parameter set for a mode and band-count bucket
pub fn bex_parameters(mode: usize, bucket: usize) -> TableResult<BexParameterSet> {
    if mode >= BEX_MODES {
        return Err(TableError::out_of_range("bex mode", mode, "0..5"));
    }
    if bucket >= BEX_BUCKETS {
        return Err(TableError::out_of_range("bex band bucket", bucket, "0..6"));
    }
    let count = BEX_ENCODED_VALUE_COUNTS[mode][bucket] as usize;
    let value_bits = &BEX_DATA_LENGTHS[mode][bucket][..count];
    let (envelope, curves) = match (mode, bucket) {
        _ if count == 0 => (BexEnvelope::None, NO_CURVES),
        (0, 3) => (BexEnvelope::Interpolated, MODE0_BANDS3_CURVES),
        (0, 4) => (BexEnvelope::Interpolated, MODE0_BANDS4_CURVES),
        (0, _) => (BexEnvelope::Interpolated, MODE0_BANDS5_CURVES),
        (2, 5) => (BexEnvelope::Scaled, MODE2_SINGLE_CURVE),
        (2, _) => (BexEnvelope::Scaled, MODE2_CURVES),
        (3, _) => (BexEnvelope::Decaying, MODE3_CURVES),
        (4, _) => (BexEnvelope::Multiplied, MODE4_CURVES),
        _ => (BexEnvelope::None, NO_CURVES),
    };
    Ok(BexParameterSet {
        mode,
        bucket,
        envelope,
        value_bits,
        curves,
    })
}

/// Check every transmitted value indexes at least one curve and every curve
/// covers the full range of its value
pub(crate) fn validate() -> TableResult<()> {
    for mode in 0..BEX_MODES {
        for bucket in 0..BEX_BUCKETS {
            let params = bex_parameters(mode, bucket)?;
            for (value, &bits) in params.value_bits().iter().enumerate() {
                if params.curves_for_value(value).next().is_none() {
                    return Err(TableError::malformed(
                        "bex",
                        format!("mode {} bucket {} value {} has no curve", mode, bucket, value),
                    ));
                }
                if bits == 0 {
                    return Err(TableError::malformed(
                        "bex",
                        format!("mode {} bucket {} value {} has zero width", mode, bucket, value),
                    ));
                }
            }
            for curve in params.curves() {
                let bits = params.value_bits().get(curve.value).copied().ok_or_else(|| {
                    TableError::malformed(
                        "bex",
                        format!("mode {} bucket {} curve reads missing value {}", mode, bucket, curve.value),
                    )
                })?;
                if curve.table.len() < 1 << bits {
                    return Err(TableError::malformed(
                        "bex",
                        format!(
                            "mode {} bucket {} value {} needs {} curve entries, has {}",
                            mode,
                            bucket,
                            curve.value,
                            1usize << bits,
                            curve.table.len()
                        ),
                    ));
                }
            }
        }
    }
    log::debug!("Validated bex parameter sets for {} modes", BEX_MODES);
    Ok(())
}
