use crate::models::address::ReadAddress;
use crate::models::cinema::{Cinema, CreateCinema, ReadCinema, UpdateCinema};

/// `address_id` is guaranteed present once `CreateCinema` has validated.
impl From<CreateCinema> for Cinema {
    fn from(input: CreateCinema) -> Self {
        Cinema {
            id: 0,
            name: input.name,
            address_id: input.address_id.unwrap_or_default(),
            address: None,
        }
    }
}

impl From<&Cinema> for ReadCinema {
    fn from(cinema: &Cinema) -> Self {
        ReadCinema {
            id: cinema.id,
            name: cinema.name.clone(),
            address: cinema.address.as_ref().map(ReadAddress::from),
        }
    }
}

impl UpdateCinema {
    /// Overwrite the cinema's name; the address link is not updatable.
    pub fn apply_to(&self, cinema: &mut Cinema) {
        cinema.name.clone_from(&self.name);
    }
}
