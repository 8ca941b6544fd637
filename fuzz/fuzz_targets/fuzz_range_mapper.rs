//! Fuzzes every mapping with arbitrary input, bounds, curve and clip policy.
//!
//! Raw maps may return NaN or infinity for violated preconditions, but must
//! never panic. A value accepted by the checked layer must be finite.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_range_mapper

#![no_main]

use libfuzzer_sys::fuzz_target;
use range_mapper::checked::{
    checked_bipolar_exp_map, checked_bipolar_linear_map, checked_curved_map,
    checked_exp_output_map, checked_inverse_curved_map, checked_lin_exp_map, checked_linear_map,
    checked_log_input_map,
};
use range_mapper::{
    ClipMode, MappingLut, Range, RangeMapper, bipolar_exp_map, bipolar_linear_map, curved_map,
    exp_output_map, inverse_curved_map, lin_exp_map, linear_map, log_input_map,
};

fn read_f32(data: &[u8], index: usize) -> f32 {
    let start = index * 4;
    data.get(start..start + 4)
        .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
        .map_or(0.0, f32::from_le_bytes)
}

fn assert_finite(result: Result<f32, range_mapper::MapError>) {
    if let Ok(y) = result {
        assert!(y.is_finite(), "checked mapping returned {y}");
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 33 {
        return;
    }
    let [x, in_min, in_max, out_min, out_max, curve, in_center, out_center] =
        std::array::from_fn(|i| read_f32(data, i));
    let clip = ClipMode::ALL[usize::from(data[32]) % ClipMode::ALL.len()];

    let _ = linear_map(x, in_min, in_max, out_min, out_max);
    let _ = log_input_map(x, in_min, in_max, out_min, out_max);
    let _ = exp_output_map(x, in_min, in_max, out_min, out_max);
    let _ = lin_exp_map(x, in_min, in_max, out_min, out_max);
    let _ = curved_map(x, in_min, in_max, out_min, out_max, curve, clip);
    let _ = inverse_curved_map(x, in_min, in_max, out_min, out_max, curve, clip);
    let _ = bipolar_linear_map(x, in_center, in_min, in_max, out_center, out_min, out_max, clip);
    let _ = bipolar_exp_map(x, in_center, in_min, in_max, out_center, out_min, out_max, clip);

    assert_finite(checked_linear_map(x, in_min, in_max, out_min, out_max));
    assert_finite(checked_log_input_map(x, in_min, in_max, out_min, out_max));
    assert_finite(checked_exp_output_map(x, in_min, in_max, out_min, out_max));
    assert_finite(checked_lin_exp_map(x, in_min, in_max, out_min, out_max));
    assert_finite(checked_curved_map(x, in_min, in_max, out_min, out_max, curve, clip));
    assert_finite(checked_inverse_curved_map(
        x, in_min, in_max, out_min, out_max, curve, clip,
    ));
    assert_finite(checked_bipolar_linear_map(
        x, in_center, in_min, in_max, out_center, out_min, out_max, clip,
    ));
    assert_finite(checked_bipolar_exp_map(
        x, in_center, in_min, in_max, out_center, out_min, out_max, clip,
    ));

    let mapper = RangeMapper::linear(Range::new(in_min, in_max), Range::new(out_min, out_max));
    if let Ok(lut) = MappingLut::from_mapper(&mapper) {
        let _ = lut.lookup(x);
    }
});
