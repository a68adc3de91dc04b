use crate::domain::model::VowelCount;
use crate::utils::error::Result;

pub trait Reporter {
    fn report(&mut self, count: &VowelCount) -> Result<()>;
}
