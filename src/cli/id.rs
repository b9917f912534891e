use crate::{error, utils};

pub fn id(link: &str) {
    match utils::extract_id(link) {
        Some(id) => println!("{}", id),
        None => error!("Invalid playlist link: {}", link.trim()),
    }
}
