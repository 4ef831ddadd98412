//! Fixed network coefficients.
//!
//! Generated once from a seeded PCG stream and frozen; the predictor has no
//! training path. Rows are output neurons, columns are inputs.

pub(crate) const HIDDEN_1: [[f64; 15]; 30] = [
    [-0.033460, -0.340326, 0.457186, 0.132317, 0.454568, -0.178413, -0.181707, -0.599206, 0.467971, -0.538835, -0.207988, -0.158987, -0.178714, -0.268843, -0.052732],
    [0.457268, 0.315404, 0.177060, 0.381521, 0.150176, 0.531469, 0.236397, -0.101540, -0.336318, -0.044297, 0.410722, 0.113637, -0.095997, -0.149205, -0.212794],
    [-0.409113, -0.048016, 0.148257, 0.383900, 0.259472, -0.515064, 0.553852, -0.186225, 0.151956, 0.039977, 0.336058, -0.397587, 0.309019, -0.402107, 0.098716],
    [0.381231, 0.083576, 0.358036, -0.241937, -0.004506, 0.336554, -0.153198, -0.512948, 0.094378, 0.487928, -0.488737, 0.040831, -0.252406, -0.248288, -0.002983],
    [-0.372429, -0.595957, 0.463739, -0.046683, -0.332031, 0.490960, -0.046772, 0.147773, 0.078514, -0.265904, 0.057995, 0.202594, -0.591265, 0.208762, -0.172978],
    [-0.575961, 0.143802, -0.549034, 0.524047, -0.549942, 0.384697, -0.410435, -0.356294, -0.457448, 0.538759, -0.079732, 0.174850, 0.178017, -0.338742, -0.265997],
    [-0.229590, 0.335969, -0.524411, 0.014167, 0.563715, 0.519969, 0.411015, 0.453540, -0.597809, 0.291902, -0.409451, -0.215570, -0.243113, 0.153446, 0.441130],
    [-0.151306, -0.256684, 0.595408, -0.374430, 0.464564, -0.393080, -0.519380, 0.173723, 0.227383, -0.153473, -0.256519, -0.250160, 0.372281, 0.253285, 0.423531],
    [0.161504, 0.197519, 0.374656, 0.210382, -0.251079, -0.220719, -0.343322, 0.027647, -0.523206, 0.241383, -0.189333, -0.123240, -0.023392, 0.462401, -0.371173],
    [-0.089535, -0.537559, -0.453005, -0.368379, -0.582694, -0.473753, -0.484286, 0.580236, -0.293063, 0.519059, 0.190841, 0.590085, 0.144053, -0.341950, -0.173142],
    [0.214821, 0.180220, -0.481868, 0.326109, 0.206916, -0.033989, 0.141489, -0.116565, 0.197859, -0.234014, -0.434313, 0.120744, -0.057959, 0.377731, -0.295303],
    [0.167657, 0.455508, -0.146108, 0.127213, -0.030850, -0.284929, 0.462166, 0.281321, -0.511038, 0.265667, 0.022826, 0.576616, -0.032512, 0.299195, -0.256818],
    [0.595444, 0.512035, 0.392233, 0.587764, 0.193293, -0.000921, 0.371577, 0.049629, 0.288104, 0.394790, 0.098457, 0.363108, 0.416688, 0.003126, 0.584215],
    [-0.483362, -0.055897, 0.275422, 0.523887, -0.576169, -0.292816, -0.379430, -0.220784, -0.408054, -0.132978, -0.288409, -0.435773, 0.539788, -0.154724, 0.062513],
    [0.208492, -0.124516, 0.021588, -0.127665, 0.455756, 0.141788, 0.019994, -0.352034, 0.459687, 0.457137, -0.186581, 0.000061, 0.491903, -0.575807, 0.251487],
    [0.178217, -0.406426, -0.475241, 0.298025, -0.358695, 0.493414, -0.207409, 0.391064, 0.343526, 0.539374, -0.558072, 0.332229, 0.265146, -0.238492, 0.260753],
    [0.408245, 0.271029, 0.163266, -0.533906, -0.488380, 0.518828, -0.152363, -0.218706, -0.549676, -0.145731, 0.419437, -0.290744, -0.088423, 0.249121, 0.485342],
    [-0.470833, -0.291482, 0.313989, 0.111225, 0.162913, 0.069842, 0.318115, 0.384075, 0.011905, 0.274870, -0.519800, -0.373727, 0.475135, 0.030822, 0.439987],
    [0.533423, -0.564067, 0.163375, -0.226099, 0.247077, -0.412698, -0.012885, 0.409769, -0.128497, -0.371997, 0.388137, 0.251468, -0.357629, -0.413514, 0.473290],
    [-0.323407, 0.200273, -0.039219, -0.171822, -0.195018, -0.442686, 0.168085, 0.105448, -0.167719, 0.048457, -0.501238, -0.109344, 0.505820, -0.346484, 0.098998],
    [-0.080547, 0.020596, -0.153161, 0.291392, 0.223815, 0.093410, -0.520694, -0.084827, 0.274153, -0.250969, 0.333915, 0.129456, -0.332107, -0.590690, 0.109939],
    [0.312410, -0.138922, -0.353475, -0.525381, -0.089483, -0.121795, 0.497834, -0.028613, 0.590985, 0.325571, -0.115790, 0.246886, 0.037305, -0.463265, 0.521389],
    [-0.119955, -0.531661, -0.255290, -0.556374, 0.192789, -0.527893, -0.526943, 0.168077, 0.362863, 0.154265, 0.119518, 0.481342, 0.366363, 0.146371, 0.431606],
    [-0.361096, -0.530411, -0.118128, 0.267384, -0.004455, 0.416891, -0.564045, 0.185883, 0.121160, 0.378829, -0.166161, -0.316526, -0.396235, -0.049419, 0.137861],
    [0.037691, 0.531070, -0.219646, 0.481138, 0.552641, 0.374997, 0.583361, 0.342486, -0.588803, -0.220955, -0.450575, -0.281533, 0.392399, 0.205152, 0.536798],
    [0.463465, 0.396104, 0.267699, -0.315778, -0.412033, 0.174260, 0.529200, 0.371436, -0.480623, -0.328477, 0.194943, 0.325547, 0.292652, -0.345089, -0.091183],
    [0.353592, -0.392090, 0.077758, 0.514827, -0.415172, 0.505991, 0.512560, -0.493374, 0.286683, 0.238460, -0.268043, -0.516566, -0.073330, 0.525887, -0.054520],
    [0.015710, -0.009333, 0.091568, 0.092990, 0.293981, 0.223450, 0.309207, -0.432682, 0.155464, -0.227853, -0.196425, 0.255381, 0.192634, 0.135172, -0.046899],
    [0.288716, -0.318378, -0.319832, -0.246603, 0.516321, 0.342472, 0.352203, -0.437420, -0.043926, 0.577696, -0.032184, 0.466445, -0.077247, 0.483156, -0.380935],
    [-0.514334, -0.294233, 0.032784, 0.142275, -0.232422, -0.596016, 0.441061, 0.439683, -0.024364, -0.359413, -0.281287, 0.430347, -0.443002, -0.462091, -0.122792],
];

pub(crate) const HIDDEN_2: [[f64; 30]; 9] = [
    [
        -0.495717, 0.236776, 0.098220, 0.328813, -0.308280, 0.285439, -0.242007, 0.300691, 0.321441, 0.007416,
        -0.007304, -0.016968, 0.288905, -0.253624, 0.152353, 0.400583, -0.057580, 0.270426, 0.343336, -0.367333,
        0.473463, 0.206208, 0.253762, -0.090107, -0.169420, -0.133239, 0.302469, 0.188955, -0.315880, 0.122111,
    ],
    [
        -0.057519, 0.358741, -0.024859, -0.068128, -0.456372, -0.096919, 0.175113, -0.393481, -0.476929, -0.315630,
        0.170196, -0.440495, -0.116076, -0.159729, 0.397997, 0.326145, 0.089301, -0.377940, -0.377173, 0.017203,
        0.176661, -0.201487, 0.362483, -0.394931, 0.057244, 0.329372, -0.172550, 0.448657, 0.050709, 0.285628,
    ],
    [
        0.249405, 0.143679, -0.378810, -0.130781, -0.146914, -0.414639, 0.288921, 0.487497, 0.297044, -0.220090,
        0.393007, 0.000199, 0.024113, -0.177764, 0.476537, 0.401044, 0.415142, -0.093270, -0.427705, 0.121080,
        0.288890, 0.068996, -0.266957, -0.142077, 0.354518, 0.172222, -0.434145, -0.003584, -0.211282, 0.024170,
    ],
    [
        0.254711, -0.213846, 0.249611, -0.128424, 0.015062, -0.141514, -0.416629, -0.376222, -0.452985, 0.263035,
        -0.369158, 0.248373, 0.466560, 0.084720, 0.205298, 0.088016, 0.196247, -0.131847, 0.324135, -0.164785,
        0.190273, 0.118952, -0.197688, -0.306813, -0.076605, -0.245517, 0.421860, -0.099435, 0.353704, 0.290886,
    ],
    [
        0.069082, -0.365399, 0.065563, -0.147148, -0.138585, 0.305404, 0.240810, -0.094077, 0.151656, 0.422382,
        0.057602, 0.165587, -0.465858, 0.257143, 0.391402, -0.154828, 0.464553, -0.463714, 0.341217, -0.144297,
        0.106953, 0.113554, 0.166308, -0.304175, 0.480596, -0.239671, 0.151162, 0.067137, -0.321977, -0.026304,
    ],
    [
        -0.449590, -0.127589, -0.172792, 0.024116, -0.149941, -0.119315, -0.142597, 0.151528, -0.068717, 0.162783,
        -0.240941, -0.140242, -0.318538, 0.164145, 0.338528, 0.050922, 0.485766, 0.278091, -0.064520, 0.035143,
        0.459442, -0.267724, -0.316176, -0.312210, -0.367912, -0.150837, -0.250157, -0.264879, 0.437269, -0.224320,
    ],
    [
        0.343331, 0.340639, 0.038103, -0.014081, 0.081592, 0.181365, 0.126971, -0.414010, -0.326180, 0.241059,
        -0.288476, -0.217238, -0.051576, 0.085351, 0.462051, 0.281851, -0.322490, 0.022750, -0.248079, 0.121067,
        0.467811, 0.284694, 0.203859, -0.053323, 0.098748, 0.026263, -0.142955, 0.368953, 0.125584, -0.253625,
    ],
    [
        -0.351767, 0.472719, -0.239380, -0.270828, 0.215504, -0.202647, -0.254270, 0.479637, 0.169289, 0.231726,
        -0.381401, 0.303744, -0.117508, -0.340745, 0.057758, 0.423714, -0.012071, 0.234173, 0.230751, -0.078708,
        0.057045, -0.253582, -0.360991, -0.047271, 0.142478, 0.368982, -0.203998, 0.323997, 0.027273, -0.292947,
    ],
    [
        -0.154640, 0.183680, 0.112658, -0.403906, 0.100804, -0.138964, 0.032871, 0.013376, -0.157482, -0.019293,
        -0.220462, -0.262733, 0.130135, -0.267657, 0.163923, -0.442696, 0.178553, -0.331663, 0.449112, 0.489147,
        -0.207633, 0.317753, -0.230284, 0.226858, -0.048806, -0.436358, -0.283274, -0.358492, -0.130664, 0.046501,
    ],
];

pub(crate) const OUTPUT: [f64; 9] = [
    0.258724, 0.207088, 0.654373, -0.256108, 0.346632, -0.398242, 0.255283, -0.463179, -0.522836,
];
