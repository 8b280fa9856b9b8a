/*!
Types which do not belong to a particular structure, notably error types.
*/

pub mod err;
