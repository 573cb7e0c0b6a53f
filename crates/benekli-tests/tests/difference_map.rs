//! Whole-image difference maps, as used for the proofing difference image

use benekli_core::batch::{delta_e_batch, lab_from_xyz_batch};
use benekli_core::{
    Cie94Params, DeltaEFormula, DifferenceOptions, Error, Lab, WhitePoint, difference_map,
};
use benekli_tests::patterns::{LabPattern, generate_lab, interleave, random_xyz};

const WIDTH: usize = 32;
const HEIGHT: usize = 24;

fn random_image(seed: u64) -> Vec<f64> {
    interleave(&generate_lab(LabPattern::Random(seed), WIDTH * HEIGHT))
}

#[test]
fn identical_images_have_zero_difference() -> anyhow::Result<()> {
    let image = random_image(1);

    for name in DeltaEFormula::NAMES {
        let options = DifferenceOptions {
            formula: name.parse()?,
            ..DifferenceOptions::default()
        };
        let map = difference_map(&image, &image, WIDTH, HEIGHT, options)?;
        let stats = map.stats();

        assert_eq!(stats.count, WIDTH * HEIGHT);
        assert!(stats.max.abs() < 1e-12, "{}: max {}", name, stats.max);
        assert!(stats.is_excellent());
        assert!(map.to_gray8(1.0).iter().all(|v| *v == 0));
    }
    Ok(())
}

#[test]
fn parallel_matches_serial() -> anyhow::Result<()> {
    let reference = random_image(2);
    let proof = random_image(3);

    for formula in [
        DeltaEFormula::Ciede2000,
        DeltaEFormula::Cie94(Cie94Params::TEXTILES),
    ] {
        let parallel = difference_map(
            &reference,
            &proof,
            WIDTH,
            HEIGHT,
            DifferenceOptions {
                formula,
                parallel: true,
            },
        )?;
        let serial = difference_map(
            &reference,
            &proof,
            WIDTH,
            HEIGHT,
            DifferenceOptions {
                formula,
                parallel: false,
            },
        )?;
        assert_eq!(parallel, serial);
    }
    Ok(())
}

#[test]
fn map_agrees_with_batch_kernel() -> anyhow::Result<()> {
    let reference = generate_lab(LabPattern::Random(4), WIDTH * HEIGHT);
    let proof = generate_lab(LabPattern::Random(5), WIDTH * HEIGHT);

    let map = difference_map(
        &interleave(&reference),
        &interleave(&proof),
        WIDTH,
        HEIGHT,
        DifferenceOptions {
            formula: DeltaEFormula::Ciede2000,
            parallel: true,
        },
    )?;

    let reference: Vec<[f64; 3]> = reference.iter().map(Lab::to_array).collect();
    let proof: Vec<[f64; 3]> = proof.iter().map(Lab::to_array).collect();
    let mut batch = vec![0.0; WIDTH * HEIGHT];
    delta_e_batch(&reference, &proof, &mut batch, DeltaEFormula::Ciede2000)?;

    assert_eq!(map.values(), batch.as_slice());
    assert_eq!(map.get(WIDTH - 1, HEIGHT - 1), batch.last().copied());
    Ok(())
}

#[test]
fn xyz_images_through_lab() -> anyhow::Result<()> {
    // Original and a slightly darker proof, both as XYZ
    let white = WhitePoint::PCS;
    let original = random_xyz(6, WIDTH * HEIGHT, 0.05, 0.9);
    let proofed: Vec<[f64; 3]> = original.iter().map(|xyz| xyz.scale(0.97).to_array()).collect();
    let original: Vec<[f64; 3]> = original.iter().map(|xyz| xyz.to_array()).collect();

    let mut original_lab = vec![[0.0; 3]; original.len()];
    let mut proofed_lab = vec![[0.0; 3]; proofed.len()];
    lab_from_xyz_batch(&original, &mut original_lab, &white)?;
    lab_from_xyz_batch(&proofed, &mut proofed_lab, &white)?;

    let map = difference_map(
        original_lab.as_flattened(),
        proofed_lab.as_flattened(),
        WIDTH,
        HEIGHT,
        DifferenceOptions {
            formula: DeltaEFormula::Ciede2000,
            parallel: true,
        },
    )?;

    let stats = map.stats();
    assert!(stats.mean > 0.0);
    assert!(stats.max < 3.5, "3% darker proof should stay acceptable: {:?}", stats);
    assert!(stats.p95 <= stats.max);
    Ok(())
}

#[test]
fn size_mismatch_is_reported() {
    let image = random_image(7);
    let err = difference_map(&image, &image[3..], WIDTH, HEIGHT, DifferenceOptions::default())
        .unwrap_err();

    assert_eq!(
        err,
        Error::BufferSize {
            expected: WIDTH * HEIGHT * 3,
            actual: WIDTH * HEIGHT * 3 - 3,
        }
    );
}

#[test]
fn options_deserialize_from_json() -> anyhow::Result<()> {
    let options: DifferenceOptions = serde_json::from_str(r#"{"formula": "ciede2000"}"#)?;
    assert_eq!(options.formula, DeltaEFormula::Ciede2000);
    assert!(options.parallel);

    let options: DifferenceOptions = serde_json::from_str(
        r#"{"formula": {"cie94": {"k_l": 2.0, "k1": 0.048, "k2": 0.014}}, "parallel": false}"#,
    )?;
    assert_eq!(options.formula, DeltaEFormula::Cie94(Cie94Params::TEXTILES));
    assert!(!options.parallel);
    Ok(())
}
