use cci_csw_probe::checks::Context;
use cci_csw_probe::csw;
use cci_csw_probe_configuration::Configuration;

mod alerting;
mod app;
mod checks;

fn context(config: &Configuration) -> Context {
    Context {
        client: csw::Client::new(config.csw.endpoint.clone(), config.csw.timeout()).expect("it should build the CSW client"),
        origin: config.csw.origin.clone(),
        search_term: config.csw.search_term.clone(),
    }
}
