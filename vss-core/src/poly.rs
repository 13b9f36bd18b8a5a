//! Secret sharing polynomials over a prime-order group and their public
//! commitment counterparts, plus Lagrange reconstruction of shared secrets
//! and secret commitments.

use core::fmt::{self, Debug};

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::{codec, Element, Error, Field, Group, Scalar, Suite};

/// Returns the x-coordinate of the share with the given index.
///
/// The x-coordinate of share `i` is `i + 1`, uniformly across evaluation,
/// verification and reconstruction: the constant term p(0) is the shared
/// secret and is never an evaluation point.
pub(crate) fn x_coordinate<C: Suite>(i: u32) -> Scalar<C> {
    let n = u64::from(i) + 1;

    // Classic left-to-right double-and-add that skips the first one bit
    // (since n is never zero, there is always a bit 1), thus `sum` starts
    // with one too.
    let one = <<C::Group as Group>::Field>::one();
    let mut sum = one;

    let bits = 64 - n.leading_zeros();
    for b in (0..bits - 1).rev() {
        sum = sum + sum;
        if n & (1u64 << b) != 0 {
            sum = sum + one;
        }
    }
    sum
}

/// An individual private share v = p(i) of a secret sharing polynomial.
#[derive(Copy, Clone, PartialEq)]
pub struct PriShare<C: Suite> {
    /// Index of the private share.
    pub(crate) i: u32,
    /// Value of the private share.
    pub(crate) v: Scalar<C>,
}

impl<C> PriShare<C>
where
    C: Suite,
{
    /// Create a new private share for index `i` with value `v`.
    pub fn new(i: u32, v: Scalar<C>) -> Self {
        Self { i, v }
    }

    /// The index of this share.
    pub fn index(&self) -> u32 {
        self.i
    }

    /// The value of this share.
    pub fn value(&self) -> Scalar<C> {
        self.v
    }
}

impl<C> Debug for PriShare<C>
where
    C: Suite,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriShare")
            .field("i", &self.i)
            .field("v", &"<redacted>")
            .finish()
    }
}

impl<C> Zeroize for PriShare<C>
where
    C: Suite,
{
    fn zeroize(&mut self) {
        self.v = <<C::Group as Group>::Field>::zero();
    }
}

/// A secret sharing polynomial of degree t-1 with coefficients in the scalar
/// field.
///
/// The constant term is the shared secret; the polynomial never leaves the
/// dealer.
#[derive(Clone, PartialEq)]
pub struct PriPoly<C: Suite> {
    /// Coefficients of the polynomial, constant term first.
    coeffs: Vec<Scalar<C>>,
}

impl<C> PriPoly<C>
where
    C: Suite,
{
    /// Creates a new secret sharing polynomial for the threshold `t` and the
    /// secret to be shared `s`. If no secret is given, a fresh random one is
    /// picked. The remaining t-1 coefficients are always picked at random.
    pub fn new<R: RngCore + CryptoRng>(
        t: u32,
        s: Option<Scalar<C>>,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if t < 1 {
            return Err(Error::InvalidThreshold);
        }

        let mut coeffs = Vec::with_capacity(t as usize);
        coeffs.push(s.unwrap_or_else(|| <<C::Group as Group>::Field>::random(rng)));
        for _ in 1..t {
            coeffs.push(<<C::Group as Group>::Field>::random(rng));
        }
        Ok(Self { coeffs })
    }

    /// Returns the secret sharing threshold.
    pub fn threshold(&self) -> u32 {
        self.coeffs.len() as u32
    }

    /// Returns the shared secret p(0), i.e. the constant term of the
    /// polynomial.
    pub fn secret(&self) -> Scalar<C> {
        self.coeffs[0]
    }

    /// Computes the private share p(i+1) via Horner's method.
    pub fn eval(&self, i: u32) -> PriShare<C> {
        let xi = x_coordinate::<C>(i);
        let mut v = <<C::Group as Group>::Field>::zero();
        for coeff in self.coeffs.iter().rev() {
            v = v * xi;
            v = v + *coeff;
        }
        PriShare { i, v }
    }

    /// Creates a list of n private shares p(1),...,p(n).
    pub fn shares(&self, n: u32) -> Vec<PriShare<C>> {
        (0..n).map(|i| self.eval(i)).collect()
    }

    /// Computes the component-wise sum of the polynomials p and q and returns
    /// it as a new polynomial.
    pub fn add(&self, q: &Self) -> Result<Self, Error> {
        if self.threshold() != q.threshold() {
            return Err(Error::MismatchedThresholds);
        }

        let coeffs = self
            .coeffs
            .iter()
            .zip(q.coeffs.iter())
            .map(|(a, b)| *a + *b)
            .collect();
        Ok(Self { coeffs })
    }

    /// Creates a public commitment polynomial for the given base point.
    pub fn commit(&self, base: CommitmentBase<C>) -> PubPoly<C> {
        let b = base.element();
        let commits = self.coeffs.iter().map(|c| b * *c).collect();
        PubPoly {
            base,
            commits,
        }
    }
}

impl<C> Debug for PriPoly<C>
where
    C: Suite,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriPoly")
            .field("t", &self.threshold())
            .field("coeffs", &"<redacted>")
            .finish()
    }
}

impl<C> Zeroize for PriPoly<C>
where
    C: Suite,
{
    fn zeroize(&mut self) {
        for coeff in self.coeffs.iter_mut() {
            *coeff = <<C::Group as Group>::Field>::zero();
        }
    }
}

impl<C> Drop for PriPoly<C>
where
    C: Suite,
{
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// The base point a sharing polynomial is committed against.
#[derive(Copy, Clone)]
pub enum CommitmentBase<C: Suite> {
    /// The group's standard generator.
    Standard,
    /// An explicitly chosen base point.
    Point(Element<C>),
}

impl<C> CommitmentBase<C>
where
    C: Suite,
{
    /// Resolves the base to a concrete group element.
    pub fn element(&self) -> Element<C> {
        match self {
            CommitmentBase::Standard => <C::Group>::generator(),
            CommitmentBase::Point(p) => *p,
        }
    }
}

impl<C> PartialEq for CommitmentBase<C>
where
    C: Suite,
{
    fn eq(&self, other: &Self) -> bool {
        self.element() == other.element()
    }
}

/// An individual public share V = P(i) of a public commitment polynomial.
#[derive(Copy, Clone, PartialEq)]
pub struct PubShare<C: Suite> {
    /// Index of the public share.
    pub(crate) i: u32,
    /// Value of the public share.
    pub(crate) v: Element<C>,
}

impl<C> PubShare<C>
where
    C: Suite,
{
    /// Create a new public share for index `i` with value `v`.
    pub fn new(i: u32, v: Element<C>) -> Self {
        Self { i, v }
    }

    /// The index of this share.
    pub fn index(&self) -> u32 {
        self.i
    }

    /// The value of this share.
    pub fn value(&self) -> Element<C> {
        self.v
    }
}

impl<C> Debug for PubShare<C>
where
    C: Suite,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PubShare")
            .field("i", &self.i)
            .field(
                "v",
                &codec::serialize_element::<C>(&self.v)
                    .map(hex::encode)
                    .unwrap_or_else(|_| "<identity>".to_string()),
            )
            .finish()
    }
}

/// A public commitment polynomial to a secret sharing polynomial.
#[derive(Clone, PartialEq)]
pub struct PubPoly<C: Suite> {
    /// Base point the commitments were computed against.
    base: CommitmentBase<C>,
    /// Commitments to the coefficients of the secret sharing polynomial.
    commits: Vec<Element<C>>,
}

impl<C> PubPoly<C>
where
    C: Suite,
{
    /// Creates a new public commitment polynomial over the given base.
    pub fn new(base: CommitmentBase<C>, commits: Vec<Element<C>>) -> Self {
        Self { base, commits }
    }

    /// Returns the base point of the commitments.
    pub fn base(&self) -> &CommitmentBase<C> {
        &self.base
    }

    /// Returns the commitments to the polynomial coefficients.
    pub fn commitments(&self) -> &[Element<C>] {
        &self.commits
    }

    /// Returns the secret sharing threshold.
    pub fn threshold(&self) -> u32 {
        self.commits.len() as u32
    }

    /// Returns the commitment to the shared secret P(0), i.e. the constant
    /// term of the polynomial.
    pub fn secret_commit(&self) -> Element<C> {
        self.commits[0]
    }

    /// Computes the public share P(i+1) via Horner's method in the group.
    pub fn eval(&self, i: u32) -> PubShare<C> {
        let xi = x_coordinate::<C>(i);
        let mut v = <C::Group>::identity();
        for commit in self.commits.iter().rev() {
            v = v * xi;
            v = v + *commit;
        }
        PubShare { i, v }
    }

    /// Creates a list of n public commitment shares P(1),...,P(n).
    pub fn shares(&self, n: u32) -> Vec<PubShare<C>> {
        (0..n).map(|i| self.eval(i)).collect()
    }

    /// Computes the component-wise sum of the polynomials p and q and returns
    /// it as a new polynomial.
    pub fn add(&self, q: &Self) -> Result<Self, Error> {
        if self.base != q.base {
            return Err(Error::MismatchedBases);
        }
        if self.threshold() != q.threshold() {
            return Err(Error::MismatchedThresholds);
        }

        let commits = self
            .commits
            .iter()
            .zip(q.commits.iter())
            .map(|(a, b)| *a + *b)
            .collect();
        Ok(Self {
            base: self.base,
            commits,
        })
    }

    /// Checks a private share against this public commitment polynomial.
    pub fn check(&self, s: &PriShare<C>) -> bool {
        let pv = self.eval(s.i);
        let ps = self.base.element() * s.v;
        pv.v == ps
    }
}

/// Selects the shares used for interpolation: the first `t` present entries
/// in slot order. Any further shares are ignored, even if they are invalid;
/// reconstruction trusts the first `t` it finds.
fn select_shares<T>(shares: &[Option<T>], t: u32) -> Result<Vec<&T>, Error> {
    let selected: Vec<&T> = shares.iter().flatten().take(t as usize).collect();
    if selected.len() < t as usize {
        return Err(Error::InsufficientShares);
    }
    Ok(selected)
}

/// Reconstructs the shared secret p(0) from at least `t` private shares using
/// Lagrange interpolation.
///
/// Shares are picked in slot order, so when more than `t` shares are present
/// the ones with the smallest indices win.
pub fn recover_secret<C: Suite>(
    shares: &[Option<PriShare<C>>],
    t: u32,
) -> Result<Scalar<C>, Error> {
    let selected = select_shares(shares, t)?;

    for (k, s) in selected.iter().enumerate() {
        if selected[..k].iter().any(|prev| prev.i == s.i) {
            return Err(Error::DuplicatedShareIndices);
        }
    }

    let mut acc = <<C::Group as Group>::Field>::zero();
    for si in &selected {
        let xi = x_coordinate::<C>(si.i);
        let mut num = si.v;
        let mut den = <<C::Group as Group>::Field>::one();
        for sj in &selected {
            if sj.i == si.i {
                continue;
            }
            let xj = x_coordinate::<C>(sj.i);
            num = num * xj;
            den = den * (xj - xi);
        }
        acc = acc + num * <<C::Group as Group>::Field>::invert(&den)?;
    }

    Ok(acc)
}

/// Reconstructs the secret commitment P(0) from at least `t` public shares
/// using Lagrange interpolation in the group.
///
/// Shares are picked in slot order, so when more than `t` shares are present
/// the ones with the smallest indices win.
pub fn recover_commit<C: Suite>(
    shares: &[Option<PubShare<C>>],
    t: u32,
) -> Result<Element<C>, Error> {
    let selected = select_shares(shares, t)?;

    for (k, s) in selected.iter().enumerate() {
        if selected[..k].iter().any(|prev| prev.i == s.i) {
            return Err(Error::DuplicatedShareIndices);
        }
    }

    let mut acc = <C::Group>::identity();
    for si in &selected {
        let xi = x_coordinate::<C>(si.i);
        let mut num = <<C::Group as Group>::Field>::one();
        let mut den = <<C::Group as Group>::Field>::one();
        for sj in &selected {
            if sj.i == si.i {
                continue;
            }
            let xj = x_coordinate::<C>(sj.i);
            num = num * xj;
            den = den * (xj - xi);
        }
        acc = acc + si.v * (num * <<C::Group as Group>::Field>::invert(&den)?);
    }

    Ok(acc)
}
