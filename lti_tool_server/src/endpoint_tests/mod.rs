mod configure;
mod launch;
mod mocks;
mod score;
