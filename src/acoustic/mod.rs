// WAV and text file helpers for excitation signals and measurements

pub mod io;
