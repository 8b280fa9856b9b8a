/*!
The algorithm for finding a refutation, factored into a collection of procedures.

- [unification] computes most general unifiers.
- [resolution] generates the resolvents of a clause pair, renaming variables apart first.
- [subsumption] holds the tautology and subsumption tests which keep the clause store lean.
- [prove] is the saturation loop which ties the above together.
*/

pub mod prove;
pub mod resolution;
pub mod subsumption;
pub mod unification;
