mod helpers;

mod admin_test;
mod callback_test;
mod quote_test;
