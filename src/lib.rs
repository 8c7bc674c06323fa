pub mod configuration;
pub mod configurationerror;

pub mod math {
    pub mod function {
        pub mod point;
        pub mod mathfunction;
        pub mod compositefunction;
        pub mod simplefunction;
    }

    pub mod tabulated {
        pub mod tabulatedfunctionerror;
        pub mod tabulatedfunction;
        pub mod validation;
        pub mod interpolation;
        pub mod arraytabulatedfunction;
        pub mod linkedlisttabulatedfunction;
        pub mod tabulatedfunctionfactory;
        pub mod synchronizedtabulatedfunction;
        pub mod tabulatedfunctionoperationservice;
        pub mod tabulatedfunctioncodec;
    }

    pub mod differential {
        pub mod differentialoperator;
        pub mod steppingdifferentialoperator;
        pub mod tabulateddifferentialoperator;
    }

    pub mod linear {
        pub mod gaussianelimination;
    }

    pub mod spline {
        pub mod bsplinebasis;
    }

    pub mod ode {
        pub mod solvererror;
        pub mod rungekutta;
        pub mod boundaryvalueproblem;
        pub mod bsplinesolver;
    }
}
