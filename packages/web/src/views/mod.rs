mod home;
pub use home::Home;

mod movies;
pub use movies::Movies;

mod player;
pub use player::Player;

mod account;
pub use account::Account;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod privacy;
pub use privacy::Privacy;
