//! Lists the reference catalog and builds one model.
//!
//! Run with `RUST_LOG=debug` to see catalog and build logging.

use std::error::Error;

use pidsim_models::{
    catalog::{Availability, Catalog, ModelId},
    models::Params,
    support::i18n::Locale,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let locale = Locale::system().unwrap_or_default();
    let catalog = Catalog::standard();

    println!("{} models ({locale}):", catalog.len());
    for (id, availability) in catalog.list() {
        match availability {
            Availability::Implemented => {
                let model = catalog.instantiate(id, locale.clone())?;
                println!("{id:>3}  {}  [{}]", model.name(), model.args().join(", "));
            }
            Availability::Reserved => println!("{id:>3}  (reserved)"),
        }
    }

    let model = catalog.instantiate(ModelId::new(8), locale)?;
    let params = Params::new().with("Tau", 2.0).with("pade_order", 3.0);
    let tf = model.transfer_function(&params)?;

    println!();
    println!("{}", model.name());
    if let Some(formula) = model.formula() {
        println!("  {formula}");
    }
    println!("  numerator:   {:?}", tf.numerator().coefficients());
    println!("  denominator: {:?}", tf.denominator().coefficients());
    println!("  dc gain:     {}", tf.dc_gain());

    Ok(())
}
