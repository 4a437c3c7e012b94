//! Logic for retrieving external resources.
use referencing::{Retrieve, UriRef};
use serde_json::Value;

pub(crate) struct DefaultRetriever;

impl Retrieve for DefaultRetriever {
    fn retrieve(
        &self,
        uri: &UriRef<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        match uri.scheme().map(|scheme| scheme.as_str()) {
            Some("http" | "https") => {
                #[cfg(any(feature = "resolve-http", test))]
                {
                    Ok(reqwest::blocking::get(uri.as_str())?.json()?)
                }
                #[cfg(not(any(feature = "resolve-http", test)))]
                Err("`resolve-http` feature or a custom resolver is required to resolve external schemas via HTTP".into())
            }
            Some("file") => {
                #[cfg(any(feature = "resolve-file", test))]
                {
                    let path = uri.path().as_str();
                    match path.rsplit_once('.').map(|(_, ext)| ext) {
                        Some("yaml" | "yml") => {
                            let file = std::fs::File::open(path)?;
                            Ok(serde_yaml::from_reader(file)?)
                        }
                        _ => {
                            let file = std::fs::File::open(path)?;
                            Ok(serde_json::from_reader(file)?)
                        }
                    }
                }
                #[cfg(not(any(feature = "resolve-file", test)))]
                {
                    Err("`resolve-file` feature or a custom resolver is required to resolve external schemas via files".into())
                }
            }
            Some(scheme) => Err(format!("Unknown scheme {scheme}").into()),
            None => Err("Can not resolve resource without a scheme".into()),
        }
    }
}
