pub(crate) mod goal_form;
pub(crate) mod goals;
pub(crate) mod overview;
pub(crate) mod transaction_form;
pub(crate) mod transactions;
