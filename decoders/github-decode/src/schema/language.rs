//! Repository languages
//!
//! GitHub sends the display name of the detected language, so the wire
//! strings keep their punctuation and capitalization (`C#`, `Objective-C`).

use crate::enums::wire_enum;

wire_enum! {
    /// Primary language of a repository
    pub enum Language as "language" {
        ActionScript => "ActionScript",
        Ada => "Ada",
        Arc => "Arc",
        Asp => "ASP",
        Assembly => "Assembly",
        Boo => "Boo",
        C => "C",
        CSharp => "C#",
        CPlusPlus => "C++",
        Clojure => "Clojure",
        CoffeeScript => "CoffeeScript",
        ColdFusion => "ColdFusion",
        CommonLisp => "Common Lisp",
        D => "D",
        Delphi => "Delphi",
        Duby => "Duby",
        Eiffel => "Eiffel",
        EmacsLisp => "Emacs Lisp",
        Erlang => "Erlang",
        FSharp => "F#",
        Factor => "Factor",
        Fortran => "FORTRAN",
        Go => "Go",
        Groovy => "Groovy",
        Haskell => "Haskell",
        HaXe => "HaXe",
        Io => "Io",
        Java => "Java",
        JavaScript => "JavaScript",
        Lua => "Lua",
        MaxMsp => "Max/MSP",
        Mirah => "Mirah",
        Nu => "Nu",
        ObjectiveC => "Objective-C",
        ObjectiveJ => "Objective-J",
        OCaml => "OCaml",
        Ooc => "ooc",
        Perl => "Perl",
        Php => "PHP",
        PureData => "Pure Data",
        Python => "Python",
        R => "R",
        Racket => "Racket",
        Ruby => "Ruby",
        Scala => "Scala",
        Scheme => "Scheme",
        Sclang => "sclang",
        SelfLang => "Self",
        Shell => "Shell",
        Smalltalk => "Smalltalk",
        SuperCollider => "SuperCollider",
        Tcl => "Tcl",
        Vala => "Vala",
        Verilog => "Verilog",
        Vhdl => "VHDL",
        VimL => "VimL",
        VisualBasic => "Visual Basic",
        XQuery => "XQuery",
    }
}
