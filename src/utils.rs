use ark_ec::{AffineCurve, ProjectiveCurve};
use ark_ff::{Field, PrimeField, UniformRand};
use ark_std::{rand::Rng, One, Zero};

/// Random affine bases and scalars for an MSM of `size` pairs over `A`.
pub fn generate_msm_inputs<A, R>(
    size: usize,
    rng: &mut R,
) -> (
    Vec<<A::Projective as ProjectiveCurve>::Affine>,
    Vec<<A::ScalarField as PrimeField>::BigInt>,
)
where
    A: AffineCurve,
    R: Rng,
{
    generate_msm_inputs_with_bits::<A, R>(size, u32::MAX, rng)
}

/// Like [`generate_msm_inputs`], but every scalar fits in `scalar_bits` bits.
/// Widths at or above the scalar field's bit length give full random scalars.
pub fn generate_msm_inputs_with_bits<A, R>(
    size: usize,
    scalar_bits: u32,
    rng: &mut R,
) -> (
    Vec<<A::Projective as ProjectiveCurve>::Affine>,
    Vec<<A::ScalarField as PrimeField>::BigInt>,
)
where
    A: AffineCurve,
    R: Rng,
{
    let field_bits = <A::ScalarField as PrimeField>::size_in_bits() as u32;
    let scalar_vec = (0..size)
        .map(|_| {
            if scalar_bits >= field_bits {
                return A::ScalarField::rand(&mut *rng).into_repr();
            }
            let mut scalar = A::ScalarField::zero();
            for _ in 0..scalar_bits {
                scalar.double_in_place();
                if rng.gen::<bool>() {
                    scalar += A::ScalarField::one();
                }
            }
            scalar.into_repr()
        })
        .collect();
    let point_vec = (0..size)
        .map(|_| A::Projective::rand(&mut *rng))
        .collect::<Vec<_>>();
    (
        <A::Projective as ProjectiveCurve>::batch_normalization_into_affine(&point_vec),
        scalar_vec,
    )
}
