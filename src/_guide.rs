/*!

Tutorials, overviews, and etc... for the `donatis` crate.

All the documentation that isn't API reference.

# Table of Contents

* [Cursors, Exhaustion, and Retries][donor_state]
* [Using Donors in Fixture Builders][fixture_builders]
* [Cargo Features][cargo_features]
* [Minimum Supported Rust Version][msrv]

 */

pub mod cargo_features;
pub mod donor_state;
pub mod fixture_builders;
pub mod msrv;
