mod catpic;

pub use self::catpic::CatPic;
