use crate::models::address::{Address, CreateAddress, ReadAddress, UpdateAddress};

impl From<CreateAddress> for Address {
    fn from(input: CreateAddress) -> Self {
        Address {
            id: 0,
            street: input.street,
            city: input.city,
            state: input.state,
            postal_code: input.postal_code,
            country: input.country,
            cinema_id: None,
        }
    }
}

impl From<&Address> for ReadAddress {
    fn from(address: &Address) -> Self {
        ReadAddress {
            id: address.id,
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            postal_code: address.postal_code.clone(),
            country: address.country.clone(),
            cinema_id: address.cinema_id,
        }
    }
}

impl UpdateAddress {
    /// Overwrite the stored columns of `address`; `id` and the derived
    /// `cinema_id` are left alone.
    pub fn apply_to(&self, address: &mut Address) {
        address.street.clone_from(&self.street);
        address.city.clone_from(&self.city);
        address.state.clone_from(&self.state);
        address.postal_code.clone_from(&self.postal_code);
        address.country.clone_from(&self.country);
    }
}
